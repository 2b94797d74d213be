use anchor_lang::prelude::*;

use crate::constants::{ALLOCATOR_SEED, TOKEN_CONFIG_SEED};
use crate::error::GamiumError;
use crate::state::{Allocator, Category, TokenBalance, TokenConfig};

// Read-only instructions. Values travel back as return data.

pub fn cap(ctx: Context<TokenView>) -> Result<u128> {
    Ok(ctx.accounts.token_config.cap)
}

pub fn total_supply(ctx: Context<TokenView>) -> Result<u128> {
    Ok(ctx.accounts.token_config.total_supply)
}

pub fn balance_of(ctx: Context<BalanceView>) -> Result<u128> {
    Ok(ctx.accounts.balance.amount)
}

pub fn category_releasable(ctx: Context<AllocatorView>, name: String) -> Result<u128> {
    let category = Category::from_name(&name)?;
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.allocator.releasable(category, now)?)
}

/// Cumulative amount minted for a category.
pub fn category_released(ctx: Context<AllocatorView>, name: String) -> Result<u128> {
    let category = Category::from_name(&name)?;
    Ok(ctx.accounts.allocator.released_of(category))
}

pub fn total_minted(ctx: Context<AllocatorView>) -> Result<u128> {
    Ok(ctx.accounts.allocator.total_minted)
}

pub fn emit_release_quote(ctx: Context<AllocatorView>, name: String) -> Result<()> {
    let category = Category::from_name(&name)?;
    let now = Clock::get()?.unix_timestamp;
    let allocator = &ctx.accounts.allocator;

    emit!(ReleaseQuote {
        category: name,
        accrued: allocator.accrued(category, now)?,
        released: allocator.released_of(category),
        releasable: allocator.releasable(category, now)?,
        now,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TokenView<'info> {
    #[account(seeds = [TOKEN_CONFIG_SEED], bump = token_config.bump)]
    pub token_config: Account<'info, TokenConfig>,
}

#[derive(Accounts)]
pub struct BalanceView<'info> {
    #[account(seeds = [TOKEN_CONFIG_SEED], bump = token_config.bump)]
    pub token_config: Account<'info, TokenConfig>,

    #[account(has_one = token_config @ GamiumError::InvalidTokenConfig)]
    pub balance: Account<'info, TokenBalance>,
}

#[derive(Accounts)]
pub struct AllocatorView<'info> {
    #[account(
        seeds = [ALLOCATOR_SEED, allocator.token_config.as_ref()],
        bump = allocator.bump
    )]
    pub allocator: Account<'info, Allocator>,
}

#[event]
pub struct ReleaseQuote {
    pub category: String,
    pub accrued: u128,
    pub released: u128,
    pub releasable: u128,
    pub now: i64,
}
