use anchor_lang::prelude::*;

use crate::constants::{ALLOCATOR_SEED, TOKEN_CONFIG_SEED};
use crate::state::{Allocator, TokenConfig};

pub fn transfer_token_ownership(ctx: Context<TransferTokenOwnership>, new_owner: Pubkey) -> Result<()> {
    let cfg = &mut ctx.accounts.token_config;
    let previous_owner = cfg.transfer_ownership(&ctx.accounts.owner.key(), new_owner)?;
    emit!(OwnershipTransferred {
        account: cfg.key(),
        previous_owner,
        new_owner,
    });
    Ok(())
}

pub fn transfer_allocator_ownership(
    ctx: Context<TransferAllocatorOwnership>,
    new_owner: Pubkey,
) -> Result<()> {
    let allocator = &mut ctx.accounts.allocator;
    let previous_owner = allocator.transfer_ownership(&ctx.accounts.owner.key(), new_owner)?;
    emit!(OwnershipTransferred {
        account: allocator.key(),
        previous_owner,
        new_owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferTokenOwnership<'info> {
    #[account(mut, seeds = [TOKEN_CONFIG_SEED], bump = token_config.bump)]
    pub token_config: Account<'info, TokenConfig>,

    pub owner: Signer<'info>,
}

#[derive(Accounts)]
pub struct TransferAllocatorOwnership<'info> {
    #[account(
        mut,
        seeds = [ALLOCATOR_SEED, allocator.token_config.as_ref()],
        bump = allocator.bump
    )]
    pub allocator: Account<'info, Allocator>,

    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    /// Token config or allocator whose owner changed.
    pub account: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
