use crate::constants::*;
use crate::error::RewardsError;
use crate::events::TreasuryFunded;
use crate::state::GlobalState;
use crate::utils::to_ui_amount;
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct FundTreasury<'info> {
    #[account(
        seeds = [GLOBAL_STATE_SEED],
        bump = global_state.bump,
        has_one = treasury
    )]
    pub global_state: Account<'info, GlobalState>,

    #[account(
        mut,
        seeds = [TREASURY_SEED, global_state.token_mint.as_ref()],
        bump = global_state.treasury_bump
    )]
    pub treasury: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = funder_token_account.mint == global_state.token_mint @ RewardsError::MintMismatch,
        token::authority = funder
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
    require!(amount > 0, RewardsError::InvalidAmount);

    require!(
        ctx.accounts.funder_token_account.amount >= amount,
        RewardsError::InsufficientBalance
    );

    let cpi_accounts = Transfer {
        from: ctx.accounts.funder_token_account.to_account_info(),
        to: ctx.accounts.treasury.to_account_info(),
        authority: ctx.accounts.funder.to_account_info(),
    };

    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

    token::transfer(cpi_ctx, amount)?;

    ctx.accounts.treasury.reload()?;
    let treasury_balance = ctx.accounts.treasury.amount;

    emit!(TreasuryFunded {
        funder: ctx.accounts.funder.key(),
        amount,
        treasury_balance,
    });

    msg!("✅ Treasury funded!");
    msg!("Amount: {} ({} BONK)", amount, to_ui_amount(amount));
    msg!("Treasury balance: {}", treasury_balance);
    Ok(())
}
