use anchor_lang::prelude::*;

#[event]
pub struct GlobalInitialized {
    pub authority: Pubkey,
    pub token_mint: Pubkey,
    pub treasury: Pubkey,
}

#[event]
pub struct UserInitialized {
    pub user: Pubkey,
    pub level: u64,
}

#[event]
pub struct TipRecorded {
    pub user: Pubkey,
    pub tip_amount: u64,
    pub points_earned: u64,
    pub vibe_points: u64,
    pub level: u64,
    pub reference: String,
}

#[event]
pub struct UpvoteRecorded {
    pub user: Pubkey,
    pub creator: Pubkey,
    pub post_id: String,
    pub points_earned: u64,
    pub vibe_points: u64,
    pub level: u64,
}

#[event]
pub struct RewardsClaimed {
    pub user: Pubkey,
    pub token_amount: u64,
    pub points_redeemed: u64,
    pub total_token_earned: u64,
}

#[event]
pub struct ConfigUpdated {
    pub previous_authority: Pubkey,
    pub new_authority: Pubkey,
}

#[event]
pub struct TreasuryFunded {
    pub funder: Pubkey,
    pub amount: u64,
    pub treasury_balance: u64,
}
