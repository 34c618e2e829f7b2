use anchor_lang::prelude::*;

use crate::error::{EscrowError, EscrowResult};

/// Deployment-time vesting parameters, fixed for the life of an escrow.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Schedule {
    /// Schedule units between lockup end and full vesting.
    pub vesting_delay: u64,
    /// Seconds in one schedule unit.
    pub seconds_per_unit: u64,
    /// Lockup units per unit of owner-chosen period.
    pub lockup_multiplier: u64,
    /// Lamports kept back from every withdrawal for transaction fees.
    pub fee_reserve: u64,
}

impl Schedule {
    pub const SIZE: usize =
        8 + // vesting_delay
        8 + // seconds_per_unit
        8 + // lockup_multiplier
        8;  // fee_reserve

    pub fn validate(&self) -> EscrowResult<()> {
        if self.vesting_delay == 0 || self.seconds_per_unit == 0 {
            return Err(EscrowError::InvalidSchedule);
        }
        Ok(())
    }

    /// Lockup length in schedule units for the given period.
    pub fn lockup_units(&self, period: u64) -> EscrowResult<u64> {
        self.lockup_multiplier
            .checked_mul(period)
            .ok_or(EscrowError::MathOverflow)
    }

    /// First instant at which the grant is no longer fully locked.
    pub fn lockup_end(&self, funding: u64, period: u64) -> EscrowResult<u64> {
        self.after_units(funding, self.lockup_units(period)?)
    }

    /// First instant at which the grant is fully vested.
    pub fn vesting_end(&self, funding: u64, period: u64) -> EscrowResult<u64> {
        let units = self
            .lockup_units(period)?
            .checked_add(self.vesting_delay)
            .ok_or(EscrowError::MathOverflow)?;
        self.after_units(funding, units)
    }

    /// Lamports the creator parks in the vault at `create`: the vault's rent-exempt
    /// minimum plus the fee reserve. Neither is part of the grant.
    pub fn reservation(&self, minimum_balance: u64) -> EscrowResult<u64> {
        minimum_balance
            .checked_add(self.fee_reserve)
            .ok_or(EscrowError::MathOverflow)
    }

    fn after_units(&self, start: u64, units: u64) -> EscrowResult<u64> {
        units
            .checked_mul(self.seconds_per_unit)
            .and_then(|secs| start.checked_add(secs))
            .ok_or(EscrowError::MathOverflow)
    }
}
