use anchor_lang::prelude::*;

use crate::constants::{MAX_NAME_LEN, MAX_SYMBOL_LEN};
use crate::error::{GamiumError, GamiumResult};

/// Capped GMM ledger PDA.
#[account]
pub struct TokenConfig {
    /// May reassign the minter and transfer ownership.
    pub owner: Pubkey,
    /// Sole key allowed to mint. `Pubkey::default()` means nobody.
    pub minter: Pubkey,
    /// Maximum supply, fixed at initialization.
    pub cap: u128,
    /// Sum of all successful mints.
    pub total_supply: u128,
    pub decimals: u8,
    pub name: String,
    pub symbol: String,
    pub bump: u8,
}

impl TokenConfig {
    pub const SIZE: usize =
        32 + // owner
        32 + // minter
        16 + // cap
        16 + // total_supply
        1 +  // decimals
        4 + MAX_NAME_LEN +   // name
        4 + MAX_SYMBOL_LEN + // symbol
        1;   // bump

    pub fn ensure_owner(&self, caller: &Pubkey) -> GamiumResult<()> {
        if *caller != self.owner {
            return Err(GamiumError::CallerIsNotOwner);
        }
        Ok(())
    }

    /// Replaces the minter unconditionally. Returns the previous minter.
    pub fn set_minter(&mut self, caller: &Pubkey, minter: Pubkey) -> GamiumResult<Pubkey> {
        self.ensure_owner(caller)?;
        Ok(std::mem::replace(&mut self.minter, minter))
    }

    pub fn transfer_ownership(
        &mut self,
        caller: &Pubkey,
        new_owner: Pubkey,
    ) -> GamiumResult<Pubkey> {
        self.ensure_owner(caller)?;
        if new_owner == Pubkey::default() {
            return Err(GamiumError::InvalidPubkey);
        }
        Ok(std::mem::replace(&mut self.owner, new_owner))
    }

    /// Validates a mint without applying it. Returns the supply it would produce.
    pub fn check_mint(&self, caller: &Pubkey, amount: u128) -> GamiumResult<u128> {
        if self.minter == Pubkey::default() || *caller != self.minter {
            return Err(GamiumError::CallerIsNotMinter);
        }
        let next = self
            .total_supply
            .checked_add(amount)
            .ok_or(GamiumError::CapExceeded)?;
        if next > self.cap {
            return Err(GamiumError::CapExceeded);
        }
        Ok(next)
    }

    pub fn mint(&mut self, caller: &Pubkey, amount: u128) -> GamiumResult<()> {
        self.total_supply = self.check_mint(caller, amount)?;
        Ok(())
    }
}
