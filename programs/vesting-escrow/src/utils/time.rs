//! Ledger clock, in the unsigned seconds the vesting schedule counts in.

use anchor_lang::prelude::*;

use crate::error::{EscrowError, EscrowResult};

pub fn to_unix(ts: i64) -> EscrowResult<u64> {
    u64::try_from(ts).map_err(|_| EscrowError::InvalidTimestamp)
}

pub fn unix_now() -> Result<u64> {
    Ok(to_unix(Clock::get()?.unix_timestamp)?)
}
