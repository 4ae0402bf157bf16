use crate::constants::*;
use crate::error::RewardsError;
use crate::events::ConfigUpdated;
use crate::state::GlobalState;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [GLOBAL_STATE_SEED],
        bump = global_state.bump,
        has_one = authority @ RewardsError::Unauthorized
    )]
    pub global_state: Account<'info, GlobalState>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<UpdateConfig>, new_authority: Option<Pubkey>) -> Result<()> {
    let global_state = &mut ctx.accounts.global_state;

    let previous_authority =
        global_state.update_config(ctx.accounts.authority.key(), new_authority)?;

    emit!(ConfigUpdated {
        previous_authority,
        new_authority: global_state.authority,
    });

    msg!("Config updated!");
    msg!("Authority: {} -> {}", previous_authority, global_state.authority);
    Ok(())
}
