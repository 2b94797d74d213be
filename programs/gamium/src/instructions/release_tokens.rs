use anchor_lang::prelude::*;

use crate::constants::{ALLOCATOR_SEED, TOKEN_CONFIG_SEED};
use crate::error::GamiumError;
use crate::state::{Allocator, TokenConfig};

// NOTE: `release_tokens` handler logic lives in `src/lib.rs` to avoid Anchor
// `Context` lifetime invariance issues when walking remaining accounts.

/// Remaining accounts: one writable `TokenBalance` per category beneficiary,
/// in `Category::ALL` order.
#[derive(Accounts)]
pub struct ReleaseTokens<'info> {
    #[account(mut, seeds = [TOKEN_CONFIG_SEED], bump = token_config.bump)]
    pub token_config: Account<'info, TokenConfig>,

    #[account(
        mut,
        seeds = [ALLOCATOR_SEED, token_config.key().as_ref()],
        bump = allocator.bump,
        has_one = token_config @ GamiumError::InvalidTokenConfig,
    )]
    pub allocator: Account<'info, Allocator>,

    pub caller: Signer<'info>,
}

#[event]
pub struct CategoryReleased {
    pub category: String,
    pub amount: u128,
    pub released_total: u128,
}
