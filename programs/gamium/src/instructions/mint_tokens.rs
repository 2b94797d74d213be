use anchor_lang::prelude::*;

use crate::constants::TOKEN_CONFIG_SEED;
use crate::error::{GamiumError, GamiumResult};
use crate::state::{TokenBalance, TokenConfig};

pub fn mint_tokens(ctx: Context<MintTokens>, amount: u128) -> Result<()> {
    let accounts = &mut *ctx.accounts;
    let event = mint_to(
        &mut accounts.token_config,
        &mut accounts.recipient_balance,
        &accounts.minter.key(),
        amount,
    )?;
    emit!(event);
    Ok(())
}

/// Raises supply and credits `recipient`. Returns the event to emit.
pub fn mint_to(
    cfg: &mut TokenConfig,
    recipient: &mut TokenBalance,
    minter: &Pubkey,
    amount: u128,
) -> GamiumResult<TokensMinted> {
    let next = cfg.check_mint(minter, amount)?;
    recipient.credit(amount)?;
    cfg.total_supply = next;
    Ok(TokensMinted {
        to: recipient.holder,
        amount,
    })
}

#[derive(Accounts)]
pub struct MintTokens<'info> {
    #[account(mut, seeds = [TOKEN_CONFIG_SEED], bump = token_config.bump)]
    pub token_config: Account<'info, TokenConfig>,

    #[account(mut, has_one = token_config @ GamiumError::InvalidTokenConfig)]
    pub recipient_balance: Account<'info, TokenBalance>,

    pub minter: Signer<'info>,
}

/// Emitted for every successful mint, by the minter or the allocator.
#[event]
pub struct TokensMinted {
    pub to: Pubkey,
    pub amount: u128,
}
