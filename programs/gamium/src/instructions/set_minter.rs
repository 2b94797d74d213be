use anchor_lang::prelude::*;

use crate::constants::TOKEN_CONFIG_SEED;
use crate::state::TokenConfig;

pub fn set_minter(ctx: Context<SetMinter>, new_minter: Pubkey) -> Result<()> {
    let cfg = &mut ctx.accounts.token_config;
    let old_minter = cfg.set_minter(&ctx.accounts.owner.key(), new_minter)?;

    emit!(MinterSet {
        owner: cfg.owner,
        old_minter,
        new_minter,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetMinter<'info> {
    #[account(mut, seeds = [TOKEN_CONFIG_SEED], bump = token_config.bump)]
    pub token_config: Account<'info, TokenConfig>,

    pub owner: Signer<'info>,
}

#[event]
pub struct MinterSet {
    pub owner: Pubkey,
    pub old_minter: Pubkey,
    pub new_minter: Pubkey,
}
