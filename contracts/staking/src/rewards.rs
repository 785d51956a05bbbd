use staking_common::BASIS_POINTS;

use crate::PoolError;

/// Reward owed on `amount` at `rate_bps`, rounded down.
///
/// `reward = floor(amount * rate_bps / 10_000)`
pub fn reward_for(amount: i128, rate_bps: u32) -> Result<i128, PoolError> {
    if amount <= 0 {
        return Ok(0);
    }
    amount
        .checked_mul(rate_bps as i128)
        .map(|scaled| scaled / BASIS_POINTS as i128)
        .ok_or(PoolError::ArithmeticOverflow)
}
