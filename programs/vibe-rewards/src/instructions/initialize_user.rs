use crate::constants::*;
use crate::events::UserInitialized;
use crate::state::UserState;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InitializeUser<'info> {
    #[account(
        init_if_needed,
        payer = user,
        space = UserState::LEN,
        seeds = [USER_STATE_SEED, user.key().as_ref()],
        bump
    )]
    pub user_state: Account<'info, UserState>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeUser>) -> Result<()> {
    let user_state = &mut ctx.accounts.user_state;

    // An existing record fails inside initialize, not at account creation
    user_state.initialize(ctx.accounts.user.key(), ctx.bumps.user_state)?;

    emit!(UserInitialized {
        user: user_state.owner,
        level: user_state.level,
    });

    msg!("✅ User registered: {}", user_state.owner);
    Ok(())
}
