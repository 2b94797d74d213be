use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;

use crate::error::GamiumError;
use crate::state::TokenBalance;

/// Loads a remaining-account `TokenBalance` and checks it is the beneficiary's.
pub(crate) fn beneficiary_balance<'info>(
    info: &'info AccountInfo<'info>,
    token_config: &Pubkey,
    beneficiary: &Pubkey,
) -> Result<Account<'info, TokenBalance>> {
    require!(info.is_writable, GamiumError::InvalidBeneficiaryAccount);
    let balance: Account<'info, TokenBalance> = Account::try_from(info)?;
    require_keys_eq!(
        balance.token_config,
        *token_config,
        GamiumError::InvalidTokenConfig
    );
    require_keys_eq!(
        balance.holder,
        *beneficiary,
        GamiumError::InvalidBeneficiaryAccount
    );
    Ok(balance)
}

/// Credits `balance` on top of its stored amount and writes it back at once.
///
/// Several handles may point at one account (two categories with the same
/// beneficiary), so the in-memory copy is refreshed before crediting.
pub(crate) fn credit_and_persist(
    balance: &mut Account<'_, TokenBalance>,
    amount: u128,
) -> Result<u128> {
    balance.reload()?;
    let total = balance.credit(amount)?;
    balance.exit(&crate::ID)?;
    Ok(total)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use anchor_lang::error::Error;

    /// Program-owned `TokenBalance` account. Leaked so it lives for `'static`.
    pub(crate) fn balance_info(
        token_config: Pubkey,
        holder: Pubkey,
        amount: u128,
        is_writable: bool,
    ) -> &'static AccountInfo<'static> {
        let mut data = Vec::new();
        TokenBalance {
            token_config,
            holder,
            amount,
            bump: 255,
        }
        .try_serialize(&mut data)
        .unwrap();

        let key = Box::leak(Box::new(Pubkey::new_unique()));
        let lamports = Box::leak(Box::new(1_000_000u64));
        let data = Box::leak(data.into_boxed_slice());
        Box::leak(Box::new(AccountInfo::new(
            key,
            false,
            is_writable,
            lamports,
            data,
            &crate::ID,
            false,
            0,
        )))
    }

    pub(crate) fn stored_amount(info: &AccountInfo) -> u128 {
        let data = info.try_borrow_data().unwrap();
        TokenBalance::try_deserialize(&mut &data[..]).unwrap().amount
    }

    pub(crate) fn error_code(err: Error) -> u32 {
        match err {
            Error::AnchorError(e) => e.error_code_number,
            Error::ProgramError(_) => panic!("expected a program-defined error"),
        }
    }

    #[test]
    fn accepts_the_beneficiary_account() {
        let cfg = Pubkey::new_unique();
        let holder = Pubkey::new_unique();
        let info = balance_info(cfg, holder, 7, true);

        let balance = beneficiary_balance(info, &cfg, &holder).unwrap();
        assert_eq!(balance.holder, holder);
        assert_eq!(balance.amount, 7);
    }

    #[test]
    fn rejects_foreign_holder() {
        let cfg = Pubkey::new_unique();
        let info = balance_info(cfg, Pubkey::new_unique(), 0, true);

        let err = beneficiary_balance(info, &cfg, &Pubkey::new_unique())
            .err()
            .unwrap();
        assert_eq!(
            error_code(err),
            u32::from(GamiumError::InvalidBeneficiaryAccount)
        );
    }

    #[test]
    fn rejects_foreign_token_config() {
        let holder = Pubkey::new_unique();
        let info = balance_info(Pubkey::new_unique(), holder, 0, true);

        let err = beneficiary_balance(info, &Pubkey::new_unique(), &holder)
            .err()
            .unwrap();
        assert_eq!(error_code(err), u32::from(GamiumError::InvalidTokenConfig));
    }

    #[test]
    fn rejects_read_only_account() {
        let cfg = Pubkey::new_unique();
        let holder = Pubkey::new_unique();
        let info = balance_info(cfg, holder, 0, false);

        let err = beneficiary_balance(info, &cfg, &holder).err().unwrap();
        assert_eq!(
            error_code(err),
            u32::from(GamiumError::InvalidBeneficiaryAccount)
        );
    }

    #[test]
    fn categories_sharing_a_holder_add_up() {
        let cfg = Pubkey::new_unique();
        let holder = Pubkey::new_unique();
        let info = balance_info(cfg, holder, 0, true);

        // Same order as a release: load, credit and write per category.
        let mut first = beneficiary_balance(info, &cfg, &holder).unwrap();
        credit_and_persist(&mut first, 25).unwrap();
        let mut second = beneficiary_balance(info, &cfg, &holder).unwrap();
        credit_and_persist(&mut second, 50).unwrap();

        assert_eq!(stored_amount(info), 75);
    }

    #[test]
    fn stale_handle_is_refreshed_before_credit() {
        let cfg = Pubkey::new_unique();
        let holder = Pubkey::new_unique();
        let info = balance_info(cfg, holder, 0, true);

        let mut a: Account<TokenBalance> = Account::try_from(info).unwrap();
        let mut b: Account<TokenBalance> = Account::try_from(info).unwrap();
        assert_eq!(credit_and_persist(&mut a, 10).unwrap(), 10);
        assert_eq!(credit_and_persist(&mut b, 5).unwrap(), 15);
        assert_eq!(stored_amount(info), 15);
    }
}
