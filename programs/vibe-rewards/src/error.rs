use anchor_lang::prelude::*;

#[error_code]
pub enum RewardsError {
    #[msg("Account has already been initialized!")]
    AlreadyInitialized = 0,

    #[msg("Amount must be greater than zero!")]
    InvalidAmount,

    #[msg("Only the configured authority can do this!")]
    Unauthorized,

    #[msg("No rewards available to claim")]
    NoRewardsAvailable,

    #[msg("Treasury balance is too low to pay this claim!")]
    InsufficientTreasury,

    #[msg("Insufficient balance in your account!")]
    InsufficientBalance,

    #[msg("New authority cannot be the default pubkey!")]
    InvalidAuthority,

    #[msg("Token account does not hold the reward mint!")]
    MintMismatch,

    #[msg("Arithmetic overflow!")]
    ArithmeticOverflow,
}
