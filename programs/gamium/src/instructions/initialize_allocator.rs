use anchor_lang::prelude::*;

use crate::constants::{ALLOCATOR_SEED, CATEGORY_COUNT, TOKEN_CONFIG_SEED};
use crate::error::GamiumError;
use crate::state::{total_allocated, Allocator, TokenConfig};

pub fn initialize_allocator(
    ctx: Context<InitializeAllocator>,
    beneficiaries: Vec<Pubkey>,
) -> Result<()> {
    let beneficiaries: [Pubkey; CATEGORY_COUNT] = beneficiaries
        .try_into()
        .map_err(|_| GamiumError::InvalidBeneficiaries)?;
    require!(
        beneficiaries.iter().all(|b| *b != Pubkey::default()),
        GamiumError::InvalidPubkey
    );
    require!(
        total_allocated()? == ctx.accounts.token_config.cap,
        GamiumError::AllocationMismatch
    );

    let allocator = &mut ctx.accounts.allocator;
    allocator.owner = ctx.accounts.owner.key();
    allocator.token_config = ctx.accounts.token_config.key();
    allocator.tge_start = None;
    allocator.released = [0; CATEGORY_COUNT];
    allocator.beneficiaries = beneficiaries;
    allocator.total_minted = 0;
    allocator.liquidity_unlocked = false;
    allocator.bump = ctx.bumps.allocator;

    msg!("Allocator {} initialized", allocator.key());
    emit!(AllocatorInitialized {
        allocator: allocator.key(),
        owner: allocator.owner,
        token_config: allocator.token_config,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeAllocator<'info> {
    #[account(seeds = [TOKEN_CONFIG_SEED], bump = token_config.bump)]
    pub token_config: Account<'info, TokenConfig>,

    #[account(
        init,
        payer = owner,
        space = 8 + Allocator::SIZE,
        seeds = [ALLOCATOR_SEED, token_config.key().as_ref()],
        bump
    )]
    pub allocator: Account<'info, Allocator>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct AllocatorInitialized {
    /// Key to pass to `set_minter`.
    pub allocator: Pubkey,
    pub owner: Pubkey,
    pub token_config: Pubkey,
}
