use crate::constants::*;
use crate::error::RewardsError;
use anchor_lang::prelude::*;

/// Points awarded for a tip of `amount` raw token units.
pub fn tip_points(amount: u64) -> Result<u64> {
    require!(amount > 0, RewardsError::InvalidAmount);

    let bonus_points = amount / TIP_BONUS_DIVISOR;

    let points = TIP_BASE_POINTS
        .checked_add(bonus_points)
        .ok_or(RewardsError::ArithmeticOverflow)?;

    Ok(points)
}

/// Level reached after earning `lifetime_points` in total.
///
/// Level 1 is the floor; every further `POINTS_PER_LEVEL` points adds one.
pub fn level_for_points(lifetime_points: u64) -> u64 {
    lifetime_points / POINTS_PER_LEVEL + STARTING_LEVEL
}

/// Token units a balance of `vibe_points` converts into. Partial blocks of
/// `MIN_POINTS_FOR_REWARD` are worth nothing.
pub fn reward_for_points(vibe_points: u64) -> Result<u64> {
    let reward = (vibe_points / MIN_POINTS_FOR_REWARD)
        .checked_mul(TOKEN_PER_POINTS)
        .ok_or(RewardsError::ArithmeticOverflow)?;

    Ok(reward)
}

pub fn to_ui_amount(raw_amount: u64) -> u64 {
    raw_amount / 10u64.pow(BONK_DECIMALS as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tip_points_adds_one_point_per_hundred_units() {
        assert_eq!(tip_points(1).unwrap(), 5);
        assert_eq!(tip_points(99).unwrap(), 5);
        assert_eq!(tip_points(100).unwrap(), 6);
        assert_eq!(tip_points(1_000).unwrap(), 15);
        assert_eq!(tip_points(123_456).unwrap(), 5 + 1_234);
    }

    #[test]
    fn tip_points_rejects_zero() {
        let err = tip_points(0).unwrap_err();
        assert_eq!(err, RewardsError::InvalidAmount.into());
    }

    #[test]
    fn tip_points_handles_max_amount() {
        assert_eq!(tip_points(u64::MAX).unwrap(), 5 + u64::MAX / 100);
    }

    #[test]
    fn level_steps_every_hundred_points() {
        assert_eq!(level_for_points(0), 1);
        assert_eq!(level_for_points(99), 1);
        assert_eq!(level_for_points(100), 2);
        assert_eq!(level_for_points(106), 2);
        assert_eq!(level_for_points(199), 2);
        assert_eq!(level_for_points(200), 3);
    }

    #[test]
    fn level_is_monotonic() {
        let mut previous = level_for_points(0);
        for points in (0..5_000).step_by(7) {
            let level = level_for_points(points);
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn reward_floors_to_whole_blocks() {
        assert_eq!(reward_for_points(0).unwrap(), 0);
        assert_eq!(reward_for_points(9).unwrap(), 0);
        assert_eq!(reward_for_points(10).unwrap(), 1);
        assert_eq!(reward_for_points(106).unwrap(), 10);
        assert_eq!(reward_for_points(1_999).unwrap(), 199);
    }

    #[test]
    fn ui_amount_strips_decimals() {
        assert_eq!(to_ui_amount(1_000_000_000), 10_000);
        assert_eq!(to_ui_amount(99_999), 0);
    }
}
