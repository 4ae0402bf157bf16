use crate::constants::*;
use crate::error::RewardsError;
use crate::utils::{level_for_points, reward_for_points};
use anchor_lang::prelude::*;

/// Deployment-wide configuration and aggregate counters.
/// PDA: ["global_state"]
#[account]
#[derive(InitSpace)]
pub struct GlobalState {
    pub authority: Pubkey,
    pub token_mint: Pubkey,
    pub treasury: Pubkey,
    pub total_tips_sent: u64,
    pub total_token_tipped: u64,
    pub total_vibe_points_distributed: u64,
    pub total_token_claimed: u64,
    pub bump: u8,
    pub treasury_bump: u8,
}

impl GlobalState {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    pub fn initialize(
        &mut self,
        authority: Pubkey,
        token_mint: Pubkey,
        treasury: Pubkey,
        bump: u8,
        treasury_bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), RewardsError::AlreadyInitialized);

        self.authority = authority;
        self.token_mint = token_mint;
        self.treasury = treasury;
        self.total_tips_sent = 0;
        self.total_token_tipped = 0;
        self.total_vibe_points_distributed = 0;
        self.total_token_claimed = 0;
        self.bump = bump;
        self.treasury_bump = treasury_bump;
        Ok(())
    }

    pub fn record_tip(&mut self, tip_amount: u64, points_earned: u64) -> Result<()> {
        let total_tips_sent = self
            .total_tips_sent
            .checked_add(1)
            .ok_or(RewardsError::ArithmeticOverflow)?;
        let total_token_tipped = self
            .total_token_tipped
            .checked_add(tip_amount)
            .ok_or(RewardsError::ArithmeticOverflow)?;
        let total_vibe_points_distributed = self
            .total_vibe_points_distributed
            .checked_add(points_earned)
            .ok_or(RewardsError::ArithmeticOverflow)?;

        self.total_tips_sent = total_tips_sent;
        self.total_token_tipped = total_token_tipped;
        self.total_vibe_points_distributed = total_vibe_points_distributed;
        Ok(())
    }

    pub fn record_upvote(&mut self, points_earned: u64) -> Result<()> {
        self.total_vibe_points_distributed = self
            .total_vibe_points_distributed
            .checked_add(points_earned)
            .ok_or(RewardsError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn record_claim(&mut self, token_amount: u64) -> Result<()> {
        self.total_token_claimed = self
            .total_token_claimed
            .checked_add(token_amount)
            .ok_or(RewardsError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Applies a config change requested by `signer`. Returns the authority
    /// that was in place before the call.
    pub fn update_config(&mut self, signer: Pubkey, new_authority: Option<Pubkey>) -> Result<Pubkey> {
        require_keys_eq!(signer, self.authority, RewardsError::Unauthorized);

        let previous_authority = self.authority;

        if let Some(authority) = new_authority {
            require_keys_neq!(authority, Pubkey::default(), RewardsError::InvalidAuthority);
            self.authority = authority;
        }

        Ok(previous_authority)
    }
}

/// Per-user points ledger.
/// PDA: ["user_state", owner]
#[account]
#[derive(InitSpace)]
pub struct UserState {
    pub owner: Pubkey,
    /// Spendable balance, zeroed by a claim.
    pub vibe_points: u64,
    /// Every point ever awarded. Drives `level`.
    pub lifetime_points: u64,
    pub total_token_earned: u64,
    pub total_tips_sent: u64,
    pub total_upvotes: u64,
    pub level: u64,
    pub bump: u8,
}

impl UserState {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn initialize(&mut self, owner: Pubkey, bump: u8) -> Result<()> {
        require!(!self.is_initialized(), RewardsError::AlreadyInitialized);

        self.owner = owner;
        self.vibe_points = 0;
        self.lifetime_points = 0;
        self.total_token_earned = 0;
        self.total_tips_sent = 0;
        self.total_upvotes = 0;
        self.level = STARTING_LEVEL;
        self.bump = bump;
        Ok(())
    }

    pub fn record_tip(&mut self, points_earned: u64) -> Result<()> {
        let total_tips_sent = self
            .total_tips_sent
            .checked_add(1)
            .ok_or(RewardsError::ArithmeticOverflow)?;
        self.award(points_earned)?;
        self.total_tips_sent = total_tips_sent;
        Ok(())
    }

    pub fn record_upvote(&mut self, points_earned: u64) -> Result<()> {
        let total_upvotes = self
            .total_upvotes
            .checked_add(1)
            .ok_or(RewardsError::ArithmeticOverflow)?;
        self.award(points_earned)?;
        self.total_upvotes = total_upvotes;
        Ok(())
    }

    fn award(&mut self, points: u64) -> Result<()> {
        let vibe_points = self
            .vibe_points
            .checked_add(points)
            .ok_or(RewardsError::ArithmeticOverflow)?;
        let lifetime_points = self
            .lifetime_points
            .checked_add(points)
            .ok_or(RewardsError::ArithmeticOverflow)?;

        self.vibe_points = vibe_points;
        self.lifetime_points = lifetime_points;
        self.level = level_for_points(lifetime_points);
        Ok(())
    }

    /// Token amount the current balance is worth, checked against what the
    /// treasury can pay out.
    pub fn claimable_reward(&self, treasury_amount: u64) -> Result<u64> {
        require!(
            self.vibe_points >= MIN_POINTS_FOR_REWARD,
            RewardsError::NoRewardsAvailable
        );

        let token_amount = reward_for_points(self.vibe_points)?;

        if treasury_amount < token_amount {
            msg!("Treasury holds {}, claim needs {}", treasury_amount, token_amount);
            return Err(error!(RewardsError::InsufficientTreasury));
        }

        Ok(token_amount)
    }

    /// Books a paid-out claim. The whole balance is redeemed, remainder
    /// included. Returns the number of points redeemed.
    pub fn settle_claim(&mut self, token_amount: u64) -> Result<u64> {
        let total_token_earned = self
            .total_token_earned
            .checked_add(token_amount)
            .ok_or(RewardsError::ArithmeticOverflow)?;

        let points_redeemed = self.vibe_points;
        self.vibe_points = 0;
        self.total_token_earned = total_token_earned;
        Ok(points_redeemed)
    }
}
