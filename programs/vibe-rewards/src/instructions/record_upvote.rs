use crate::constants::*;
use crate::error::RewardsError;
use crate::events::UpvoteRecorded;
use crate::state::{GlobalState, UserState};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct RecordUpvote<'info> {
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

pub fn handler(ctx: Context<RecordUpvote>, creator: Pubkey, post_id: String) -> Result<()> {
    let user_state = &mut ctx.accounts.user_state;
    let global_state = &mut ctx.accounts.global_state;

    user_state.record_upvote(UPVOTE_REWARD)?;
    global_state.record_upvote(UPVOTE_REWARD)?;

    msg!("Creator: {}, post: {}", creator, post_id);

    emit!(UpvoteRecorded {
        user: user_state.owner,
        creator,
        post_id,
        points_earned: UPVOTE_REWARD,
        vibe_points: user_state.vibe_points,
        level: user_state.level,
    });

    msg!("✅ Upvote recorded!");
    msg!("Vibe points: {}, level {}", user_state.vibe_points, user_state.level);
    Ok(())
}
