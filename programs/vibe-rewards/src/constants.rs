// Vibe Points Constants

// Tip scoring: 5 base points + 1 point per 100 raw token units tipped
pub const TIP_BASE_POINTS: u64 = 5;
pub const TIP_BONUS_DIVISOR: u64 = 100;

// Upvote scoring
pub const UPVOTE_REWARD: u64 = 1;

// Reward Conversion
// 1 token unit per 10 points, claimable once the balance reaches 10 points
pub const MIN_POINTS_FOR_REWARD: u64 = 10;
pub const TOKEN_PER_POINTS: u64 = 1;

// Leveling
pub const POINTS_PER_LEVEL: u64 = 100;
pub const STARTING_LEVEL: u64 = 1;

// BONK mint decimals, used only for log formatting
pub const BONK_DECIMALS: u8 = 5;

// PDA Seeds
pub const GLOBAL_STATE_SEED: &[u8] = b"global_state";
pub const USER_STATE_SEED: &[u8] = b"user_state";
pub const TREASURY_SEED: &[u8] = b"treasury";
