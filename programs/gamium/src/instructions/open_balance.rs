use anchor_lang::prelude::*;

use crate::constants::{BALANCE_SEED, TOKEN_CONFIG_SEED};
use crate::state::{TokenBalance, TokenConfig};

pub fn open_balance(ctx: Context<OpenBalance>, holder: Pubkey) -> Result<()> {
    let balance = &mut ctx.accounts.balance;
    balance.token_config = ctx.accounts.token_config.key();
    balance.holder = holder;
    balance.amount = 0;
    balance.bump = ctx.bumps.balance;
    Ok(())
}

#[derive(Accounts)]
#[instruction(holder: Pubkey)]
pub struct OpenBalance<'info> {
    #[account(seeds = [TOKEN_CONFIG_SEED], bump = token_config.bump)]
    pub token_config: Account<'info, TokenConfig>,

    #[account(
        init,
        payer = payer,
        space = 8 + TokenBalance::SIZE,
        seeds = [BALANCE_SEED, token_config.key().as_ref(), holder.as_ref()],
        bump
    )]
    pub balance: Account<'info, TokenBalance>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
