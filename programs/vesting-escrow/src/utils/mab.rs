//! Minimum allowable balance (MAB) of a funded escrow.
//!
//! - before `lockup_end`: the whole grant is held back
//! - from `vesting_end` on: nothing is held back
//! - in between: `total * (vesting_delay - elapsed_units) / vesting_delay`, where
//!   `elapsed_units` counts whole schedule units since `lockup_end`
//!
//! Both divisions floor, so the balance steps down once per completed unit and
//! never releases ahead of schedule.

use crate::error::{EscrowError, EscrowResult};
use crate::state::Schedule;

pub fn minimum_allowable_balance(
    now: u64,
    funding: u64,
    total: u64,
    period: u64,
    schedule: &Schedule,
) -> EscrowResult<u64> {
    schedule.validate()?;

    let lockup_end = schedule.lockup_end(funding, period)?;
    if now < lockup_end {
        return Ok(total);
    }
    if now >= schedule.vesting_end(funding, period)? {
        return Ok(0);
    }

    let elapsed_units = (now - lockup_end) / schedule.seconds_per_unit;
    let remaining_units = schedule
        .vesting_delay
        .checked_sub(elapsed_units)
        .ok_or(EscrowError::MathOverflow)?;
    let mab = (total as u128)
        .checked_mul(remaining_units as u128)
        .ok_or(EscrowError::MathOverflow)?
        / schedule.vesting_delay as u128;
    u64::try_from(mab).map_err(|_| EscrowError::MathOverflow)
}

/// Lamports the owner could move out right now, ignoring the MAB.
pub fn available_balance(balance: u64, minimum_balance: u64, fee_reserve: u64) -> u64 {
    balance
        .saturating_sub(minimum_balance)
        .saturating_sub(fee_reserve)
}
