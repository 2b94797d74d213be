use anchor_lang::prelude::*;

use crate::constants::ALLOCATOR_SEED;
use crate::state::Allocator;

pub fn start_tge(ctx: Context<StartTge>, timestamp: i64) -> Result<()> {
    let allocator = &mut ctx.accounts.allocator;
    allocator.start_tge(&ctx.accounts.owner.key(), timestamp)?;

    msg!("TGE start set to {}", timestamp);
    emit!(TgeStarted {
        allocator: allocator.key(),
        tge_start: timestamp,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct StartTge<'info> {
    #[account(
        mut,
        seeds = [ALLOCATOR_SEED, allocator.token_config.as_ref()],
        bump = allocator.bump
    )]
    pub allocator: Account<'info, Allocator>,

    pub owner: Signer<'info>,
}

#[event]
pub struct TgeStarted {
    pub allocator: Pubkey,
    pub tge_start: i64,
}
