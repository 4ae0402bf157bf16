use crate::constants::*;
use crate::error::RewardsError;
use crate::events::RewardsClaimed;
use crate::state::{GlobalState, UserState};
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    #[account(
        mut,
        seeds = [USER_STATE_SEED, user.key().as_ref()],
        bump = user_state.bump,
        constraint = user_state.owner == user.key() @ RewardsError::Unauthorized
    )]
    pub user_state: Account<'info, UserState>,

    // Signs the treasury transfer
    #[account(
        mut,
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
        constraint = user_token_account.mint == global_state.token_mint @ RewardsError::MintMismatch,
        constraint = user_token_account.owner == user.key() @ RewardsError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<ClaimRewards>) -> Result<()> {
    let token_amount = ctx
        .accounts
        .user_state
        .claimable_reward(ctx.accounts.treasury.amount)?;

    let cpi_accounts = Transfer {
        from: ctx.accounts.treasury.to_account_info(),
        to: ctx.accounts.user_token_account.to_account_info(),
        authority: ctx.accounts.global_state.to_account_info(),
    };

    let cpi_program = ctx.accounts.token_program.to_account_info();

    let seeds: &[&[u8]] = &[GLOBAL_STATE_SEED, &[ctx.accounts.global_state.bump]];
    let signer = &[seeds];

    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer);

    // Transfer and point reset land in the same transaction
    token::transfer(cpi_ctx, token_amount)?;

    let user_state = &mut ctx.accounts.user_state;
    let points_redeemed = user_state.settle_claim(token_amount)?;
    ctx.accounts.global_state.record_claim(token_amount)?;

    emit!(RewardsClaimed {
        user: user_state.owner,
        token_amount,
        points_redeemed,
        total_token_earned: user_state.total_token_earned,
    });

    msg!("✅ Rewards claimed!");
    msg!("Points redeemed: {}", points_redeemed);
    msg!("Amount: {}", token_amount);
    msg!("Total earned: {}", user_state.total_token_earned);
    msg!("Level: {}", user_state.level);
    Ok(())
}
