use anchor_lang::prelude::*;

use crate::constants::{DECIMALS, MAX_NAME_LEN, MAX_SYMBOL_LEN, TOKEN_CAP, TOKEN_CONFIG_SEED};
use crate::error::GamiumError;
use crate::state::TokenConfig;

pub fn initialize_token(ctx: Context<InitializeToken>, name: String, symbol: String) -> Result<()> {
    require!(name.len() <= MAX_NAME_LEN, GamiumError::NameTooLong);
    require!(symbol.len() <= MAX_SYMBOL_LEN, GamiumError::NameTooLong);

    let cfg = &mut ctx.accounts.token_config;
    cfg.owner = ctx.accounts.owner.key();
    cfg.minter = Pubkey::default();
    cfg.cap = TOKEN_CAP;
    cfg.total_supply = 0;
    cfg.decimals = DECIMALS;
    cfg.name = name;
    cfg.symbol = symbol;
    cfg.bump = ctx.bumps.token_config;

    msg!("Token {} ({}) initialized, cap {}", cfg.name, cfg.symbol, cfg.cap);
    emit!(TokenInitialized {
        owner: cfg.owner,
        cap: cfg.cap,
        decimals: cfg.decimals,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeToken<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + TokenConfig::SIZE,
        seeds = [TOKEN_CONFIG_SEED],
        bump
    )]
    pub token_config: Account<'info, TokenConfig>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokenInitialized {
    pub owner: Pubkey,
    pub cap: u128,
    pub decimals: u8,
}
