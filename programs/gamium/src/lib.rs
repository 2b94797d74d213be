use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;

use crate::constants::CATEGORY_COUNT;
use crate::error::GamiumError;
use crate::instructions::balance_accounts::{beneficiary_balance, credit_and_persist};

declare_id!("GVpy3pchmyasV42vDg2XEBoG8RouwFXLk6KhqRG8BsLc");

#[program]
pub mod gamium {
    use super::*;

    pub fn initialize_token(ctx: Context<InitializeToken>, name: String, symbol: String) -> Result<()> {
        instructions::initialize_token::initialize_token(ctx, name, symbol)
    }

    pub fn open_balance(ctx: Context<OpenBalance>, holder: Pubkey) -> Result<()> {
        instructions::open_balance::open_balance(ctx, holder)
    }

    pub fn set_minter(ctx: Context<SetMinter>, new_minter: Pubkey) -> Result<()> {
        instructions::set_minter::set_minter(ctx, new_minter)
    }

    pub fn mint(ctx: Context<MintTokens>, amount: u128) -> Result<()> {
        instructions::mint_tokens::mint_tokens(ctx, amount)
    }

    pub fn transfer_token_ownership(
        ctx: Context<TransferTokenOwnership>,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::transfer_ownership::transfer_token_ownership(ctx, new_owner)
    }

    pub fn cap(ctx: Context<TokenView>) -> Result<u128> {
        instructions::views::cap(ctx)
    }

    pub fn total_supply(ctx: Context<TokenView>) -> Result<u128> {
        instructions::views::total_supply(ctx)
    }

    pub fn balance_of(ctx: Context<BalanceView>) -> Result<u128> {
        instructions::views::balance_of(ctx)
    }

    pub fn initialize_allocator(
        ctx: Context<InitializeAllocator>,
        beneficiaries: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::initialize_allocator::initialize_allocator(ctx, beneficiaries)
    }

    pub fn start_tge(ctx: Context<StartTge>, timestamp: i64) -> Result<()> {
        instructions::start_tge::start_tge(ctx, timestamp)
    }

    pub fn transfer_allocator_ownership(
        ctx: Context<TransferAllocatorOwnership>,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::transfer_ownership::transfer_allocator_ownership(ctx, new_owner)
    }

    pub fn category_releasable(ctx: Context<AllocatorView>, name: String) -> Result<u128> {
        instructions::views::category_releasable(ctx, name)
    }

    pub fn category_released(ctx: Context<AllocatorView>, name: String) -> Result<u128> {
        instructions::views::category_released(ctx, name)
    }

    pub fn total_minted(ctx: Context<AllocatorView>) -> Result<u128> {
        instructions::views::total_minted(ctx)
    }

    pub fn emit_release_quote(ctx: Context<AllocatorView>, name: String) -> Result<()> {
        instructions::views::emit_release_quote(ctx, name)
    }

    pub fn unlock_liquidity(ctx: Context<UnlockLiquidity>) -> Result<()> {
        instructions::unlock_liquidity::unlock_liquidity(ctx)
    }

    pub fn release_tokens<'info>(
        ctx: Context<'_, '_, 'info, 'info, ReleaseTokens<'info>>,
    ) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let allocator_key = ctx.accounts.allocator.key();
        let token_config_key = ctx.accounts.token_config.key();
        let remaining = ctx.remaining_accounts;
        require!(
            remaining.len() == CATEGORY_COUNT,
            GamiumError::MissingBeneficiaryAccounts
        );

        let accounts = &mut *ctx.accounts;
        let plan = accounts
            .allocator
            .release(&mut accounts.token_config, &allocator_key, now)?;

        let mut minted: u128 = 0;
        for (category, amount) in plan {
            let mut balance = beneficiary_balance(
                &remaining[category.index()],
                &token_config_key,
                &accounts.allocator.beneficiary_of(category),
            )?;
            credit_and_persist(&mut balance, amount)?;
            minted = minted.checked_add(amount).ok_or(GamiumError::MathOverflow)?;

            emit!(TokensMinted {
                to: balance.holder,
                amount,
            });
            emit!(CategoryReleased {
                category: category.name().to_string(),
                amount,
                released_total: accounts.allocator.released_of(category),
            });
        }

        msg!(
            "Released {} at {}, total minted {}",
            minted,
            now,
            accounts.allocator.total_minted
        );
        Ok(())
    }
}
