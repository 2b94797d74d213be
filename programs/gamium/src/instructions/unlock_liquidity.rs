use anchor_lang::prelude::*;

use crate::constants::{ALLOCATOR_SEED, TOKEN_CONFIG_SEED};
use crate::error::GamiumError;
use crate::instructions::balance_accounts::credit_and_persist;
use crate::instructions::TokensMinted;
use crate::state::{Allocator, Category, TokenBalance, TokenConfig};

pub fn unlock_liquidity(ctx: Context<UnlockLiquidity>) -> Result<()> {
    let allocator_key = ctx.accounts.allocator.key();
    let caller = ctx.accounts.owner.key();

    let accounts = &mut *ctx.accounts;
    let plan = accounts
        .allocator
        .unlock_liquidity(&mut accounts.token_config, &allocator_key, &caller)?;

    let minted = credit_unlocked(
        &mut accounts.liquidity_balance,
        &mut accounts.exchanges_balance,
        &plan,
    )?;
    for event in minted {
        emit!(event);
    }

    let allocator = &accounts.allocator;
    msg!("Liquidity unlocked, total minted {}", allocator.total_minted);
    emit!(LiquidityUnlocked {
        liquidity_released: allocator.released_of(Category::Liquidity),
        exchanges_released: allocator.released_of(Category::Exchanges),
        total_minted: allocator.total_minted,
    });
    Ok(())
}

/// Credits each planned amount to its beneficiary balance.
///
/// Both handles may be the same account when Liquidity and Exchanges share a
/// beneficiary. Every credit is written through immediately and both handles
/// are reloaded afterwards, so the exit writes agree in either order.
pub fn credit_unlocked<'info>(
    liquidity: &mut Account<'info, TokenBalance>,
    exchanges: &mut Account<'info, TokenBalance>,
    plan: &[(Category, u128)],
) -> Result<Vec<TokensMinted>> {
    let mut minted = Vec::with_capacity(plan.len());
    for &(category, amount) in plan {
        let balance = match category {
            Category::Liquidity => &mut *liquidity,
            _ => &mut *exchanges,
        };
        credit_and_persist(balance, amount)?;
        minted.push(TokensMinted {
            to: balance.holder,
            amount,
        });
    }
    liquidity.reload()?;
    exchanges.reload()?;
    Ok(minted)
}

#[derive(Accounts)]
pub struct UnlockLiquidity<'info> {
    #[account(mut, seeds = [TOKEN_CONFIG_SEED], bump = token_config.bump)]
    pub token_config: Account<'info, TokenConfig>,

    #[account(
        mut,
        seeds = [ALLOCATOR_SEED, token_config.key().as_ref()],
        bump = allocator.bump,
        has_one = token_config @ GamiumError::InvalidTokenConfig,
    )]
    pub allocator: Account<'info, Allocator>,

    #[account(
        mut,
        has_one = token_config @ GamiumError::InvalidTokenConfig,
        constraint = liquidity_balance.holder == allocator.beneficiary_of(Category::Liquidity)
            @ GamiumError::InvalidBeneficiaryAccount,
    )]
    pub liquidity_balance: Account<'info, TokenBalance>,

    #[account(
        mut,
        has_one = token_config @ GamiumError::InvalidTokenConfig,
        constraint = exchanges_balance.holder == allocator.beneficiary_of(Category::Exchanges)
            @ GamiumError::InvalidBeneficiaryAccount,
    )]
    pub exchanges_balance: Account<'info, TokenBalance>,

    pub owner: Signer<'info>,
}

#[event]
pub struct LiquidityUnlocked {
    pub liquidity_released: u128,
    pub exchanges_released: u128,
    pub total_minted: u128,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ONE_GMM;
    use crate::instructions::balance_accounts::tests::{balance_info, stored_amount};
    use anchor_lang::AccountsExit;

    const BILLION: u128 = 1_000_000_000 * ONE_GMM;

    #[test]
    fn shared_beneficiary_receives_both_allocations() {
        let cfg = Pubkey::new_unique();
        let holder = Pubkey::new_unique();
        let info = balance_info(cfg, holder, 0, true);

        // The same account bound to both fields, as the runtime would pass it.
        let mut liquidity: Account<TokenBalance> = Account::try_from(info).unwrap();
        let mut exchanges: Account<TokenBalance> = Account::try_from(info).unwrap();
        let plan = [(Category::Liquidity, BILLION), (Category::Exchanges, BILLION)];

        let minted = credit_unlocked(&mut liquidity, &mut exchanges, &plan).unwrap();
        assert_eq!(minted.len(), 2);
        assert!(minted.iter().all(|e| e.to == holder && e.amount == BILLION));

        // Field order, then the reverse: the last write must not lose a credit.
        liquidity.exit(&crate::ID).unwrap();
        exchanges.exit(&crate::ID).unwrap();
        assert_eq!(stored_amount(info), 2 * BILLION);
        exchanges.exit(&crate::ID).unwrap();
        liquidity.exit(&crate::ID).unwrap();
        assert_eq!(stored_amount(info), 2 * BILLION);
    }

    #[test]
    fn shared_beneficiary_partial_plan_survives_exit() {
        let cfg = Pubkey::new_unique();
        let holder = Pubkey::new_unique();
        let info = balance_info(cfg, holder, 3, true);

        let mut liquidity: Account<TokenBalance> = Account::try_from(info).unwrap();
        let mut exchanges: Account<TokenBalance> = Account::try_from(info).unwrap();
        // Exchanges already drained: only Liquidity is credited, yet the
        // untouched exchanges handle is written last.
        credit_unlocked(&mut liquidity, &mut exchanges, &[(Category::Liquidity, BILLION)])
            .unwrap();

        liquidity.exit(&crate::ID).unwrap();
        exchanges.exit(&crate::ID).unwrap();
        assert_eq!(stored_amount(info), BILLION + 3);
    }

    #[test]
    fn distinct_beneficiaries_are_credited_separately() {
        let cfg = Pubkey::new_unique();
        let liq_holder = Pubkey::new_unique();
        let ex_holder = Pubkey::new_unique();
        let liq_info = balance_info(cfg, liq_holder, 0, true);
        let ex_info = balance_info(cfg, ex_holder, 0, true);

        let mut liquidity: Account<TokenBalance> = Account::try_from(liq_info).unwrap();
        let mut exchanges: Account<TokenBalance> = Account::try_from(ex_info).unwrap();
        let plan = [(Category::Liquidity, BILLION), (Category::Exchanges, 7)];

        let minted = credit_unlocked(&mut liquidity, &mut exchanges, &plan).unwrap();
        assert_eq!(minted[0].to, liq_holder);
        assert_eq!(minted[1].to, ex_holder);
        liquidity.exit(&crate::ID).unwrap();
        exchanges.exit(&crate::ID).unwrap();
        assert_eq!(stored_amount(liq_info), BILLION);
        assert_eq!(stored_amount(ex_info), 7);
    }

    #[test]
    fn empty_plan_mints_nothing() {
        let info = balance_info(Pubkey::new_unique(), Pubkey::new_unique(), 9, true);
        let mut liquidity: Account<TokenBalance> = Account::try_from(info).unwrap();
        let mut exchanges: Account<TokenBalance> = Account::try_from(info).unwrap();

        assert!(credit_unlocked(&mut liquidity, &mut exchanges, &[]).unwrap().is_empty());
        assert_eq!(stored_amount(info), 9);
    }
}
