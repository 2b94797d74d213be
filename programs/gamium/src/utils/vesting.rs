//! Category accrual arithmetic. Time is always passed in; nothing here reads
//! the clock.
//!
//! - before the cliff ends (or before TGE is set) a category has accrued its
//!   TGE release
//! - after the cliff the remainder accrues linearly, floored to base units
//! - `Immediate` categories have accrued their whole allocation at all times

use crate::error::{GamiumError, GamiumResult};
use crate::state::category::{CategorySchedule, VestingPolicy};

/// Amount promised to a category at `now`.
pub fn accrued_amount(
    schedule: &CategorySchedule,
    tge_start: Option<i64>,
    now: i64,
) -> GamiumResult<u128> {
    let (cliff_seconds, linear_seconds) = match schedule.policy {
        VestingPolicy::Immediate => return Ok(schedule.total_allocation),
        VestingPolicy::CliffLinear {
            cliff_seconds,
            linear_seconds,
        } => (cliff_seconds, linear_seconds),
    };

    let Some(start) = tge_start else {
        return Ok(schedule.tge_release);
    };
    let cliff_end = start
        .checked_add(cliff_seconds)
        .ok_or(GamiumError::MathOverflow)?;
    if now < cliff_end {
        return Ok(schedule.tge_release);
    }

    let elapsed = now
        .checked_sub(cliff_end)
        .ok_or(GamiumError::MathOverflow)?;
    if linear_seconds <= 0 || elapsed >= linear_seconds {
        return Ok(schedule.total_allocation);
    }

    let vesting_portion = schedule
        .total_allocation
        .checked_sub(schedule.tge_release)
        .ok_or(GamiumError::MathOverflow)?;
    let linear = vesting_portion
        .checked_mul(elapsed as u128)
        .ok_or(GamiumError::MathOverflow)?
        / (linear_seconds as u128);

    schedule
        .tge_release
        .checked_add(linear)
        .ok_or(GamiumError::MathOverflow)
}

/// Accrued minus already minted. Never negative.
pub fn releasable_amount(
    schedule: &CategorySchedule,
    released: u128,
    tge_start: Option<i64>,
    now: i64,
) -> GamiumResult<u128> {
    let accrued = accrued_amount(schedule, tge_start, now)?;
    Ok(accrued.saturating_sub(released))
}
