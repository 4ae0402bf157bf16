use anchor_lang::prelude::*;
use instructions::*;

declare_id!("3CDmG5fSwYF4CUE86s32x9aNQwiSPvRt1B3bXPKnKerb");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;


/// Vibe points ledger for SolCreator.
///
/// Tips and upvotes earn points, lifetime points set the user's level, and
/// points are redeemed for BONK paid out of a program-owned treasury.
#[program]
pub mod vibe_rewards {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    pub fn initialize_user(ctx: Context<InitializeUser>) -> Result<()> {
        instructions::initialize_user::handler(ctx)
    }

    /// Records a tip paid outside the program and scores it.
    pub fn record_tip(ctx: Context<RecordTip>, tip_amount: u64, reference: String) -> Result<()> {
        instructions::record_tip::handler(ctx, tip_amount, reference)
    }

    pub fn record_upvote(
        ctx: Context<RecordUpvote>,
        creator: Pubkey,
        post_id: String,
    ) -> Result<()> {
        instructions::record_upvote::handler(ctx, creator, post_id)
    }

    /// Redeems the whole point balance for tokens from the treasury.
    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim_rewards::handler(ctx)
    }

    pub fn update_config(ctx: Context<UpdateConfig>, new_authority: Option<Pubkey>) -> Result<()> {
        instructions::update_config::handler(ctx, new_authority)
    }

    pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
        instructions::fund_treasury::handler(ctx, amount)
    }
}
