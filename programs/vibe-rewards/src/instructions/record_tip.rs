use crate::constants::*;
use crate::error::RewardsError;
use crate::events::TipRecorded;
use crate::state::{GlobalState, UserState};
use crate::utils::{tip_points, to_ui_amount};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct RecordTip<'info> {
    #[account(
        mut,
        seeds = [USER_STATE_SEED, user.key().as_ref()],
        bump = user_state.bump,
        constraint = user_state.owner == user.key() @ RewardsError::Unauthorized
    )]
    pub user_state: Account<'info, UserState>,

    #[account(
        mut,
        seeds = [GLOBAL_STATE_SEED],
        bump = global_state.bump
    )]
    pub global_state: Account<'info, GlobalState>,

    pub user: Signer<'info>,
}

pub fn handler(ctx: Context<RecordTip>, tip_amount: u64, reference: String) -> Result<()> {
    let points_earned = tip_points(tip_amount)?;

    let user_state = &mut ctx.accounts.user_state;
    let global_state = &mut ctx.accounts.global_state;

    user_state.record_tip(points_earned)?;
    global_state.record_tip(tip_amount, points_earned)?;

    emit!(TipRecorded {
        user: user_state.owner,
        tip_amount,
        points_earned,
        vibe_points: user_state.vibe_points,
        level: user_state.level,
        reference,
    });

    msg!("✅ Tip recorded!");
    msg!("Amount: {} ({} BONK)", tip_amount, to_ui_amount(tip_amount));
    msg!("Points earned: {}", points_earned);
    msg!("Vibe points: {}, level {}", user_state.vibe_points, user_state.level);
    Ok(())
}
