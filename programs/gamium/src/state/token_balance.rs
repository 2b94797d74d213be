use anchor_lang::prelude::*;

use crate::error::{GamiumError, GamiumResult};

/// Per-holder GMM balance PDA.
#[account]
pub struct TokenBalance {
    pub token_config: Pubkey,
    pub holder: Pubkey,
    pub amount: u128,
    pub bump: u8,
}

impl TokenBalance {
    pub const SIZE: usize =
        32 + // token_config
        32 + // holder
        16 + // amount
        1;   // bump

    pub fn credit(&mut self, amount: u128) -> GamiumResult<u128> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(GamiumError::MathOverflow)?;
        Ok(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_accumulates() {
        let mut b = TokenBalance {
            token_config: Pubkey::new_unique(),
            holder: Pubkey::new_unique(),
            amount: 0,
            bump: 255,
        };
        assert_eq!(b.credit(23).unwrap(), 23);
        assert_eq!(b.credit(0).unwrap(), 23);
        assert!(matches!(b.credit(u128::MAX), Err(GamiumError::MathOverflow)));
        assert_eq!(b.amount, 23);
    }
}
