use crate::constants::*;
use crate::events::GlobalInitialized;
use crate::state::GlobalState;
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init_if_needed,
        payer = authority,
        space = GlobalState::LEN,
        seeds = [GLOBAL_STATE_SEED],
        bump
    )]
    pub global_state: Account<'info, GlobalState>,

    pub token_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = authority,
        token::mint = token_mint,
        token::authority = global_state,
        seeds = [TREASURY_SEED, token_mint.key().as_ref()],
        bump
    )]
    pub treasury: Account<'info, TokenAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let global_state = &mut ctx.accounts.global_state;

    global_state.initialize(
        ctx.accounts.authority.key(),
        ctx.accounts.token_mint.key(),
        ctx.accounts.treasury.key(),
        ctx.bumps.global_state,
        ctx.bumps.treasury,
    )?;

    emit!(GlobalInitialized {
        authority: global_state.authority,
        token_mint: global_state.token_mint,
        treasury: global_state.treasury,
    });

    msg!("Vibe rewards initialized!");
    msg!("Authority: {}", global_state.authority);
    msg!("Token mint: {}", global_state.token_mint);
    msg!("Treasury: {}", global_state.treasury);
    Ok(())
}
