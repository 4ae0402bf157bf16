pub mod initialize;
pub mod initialize_user;
pub mod record_tip;
pub mod record_upvote;
pub mod claim_rewards;
pub mod update_config;
pub mod fund_treasury;

pub use initialize::*;
pub use initialize_user::*;
pub use record_tip::*;
pub use record_upvote::*;
pub use claim_rewards::*;
pub use update_config::*;
pub use fund_treasury::*;
