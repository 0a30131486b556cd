use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};

use crate::error::LockError;
use crate::ledger::schedule::VestingSchedule;

/// Per-holder balances.
///
/// `locked` only grows (via [`LedgerAccount::lock`]) and `claimed` only grows
/// up to the vested part of `locked` (via [`LedgerAccount::claim`]), so
/// `claimed <= locked` holds after every operation.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable,
)]
#[repr(C)]
pub struct LedgerAccount {
    /// Spendable balance.
    pub available: u64,
    /// Total ever locked under the schedule.
    pub locked: u64,
    /// Cumulative amount moved from `locked` back to `available`.
    pub claimed: u64,
}

impl Default for LedgerAccount {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl LedgerAccount {
    pub const SIZE: usize = core::mem::size_of::<LedgerAccount>();

    /// Locked value not yet claimed.
    pub fn unclaimed(&self) -> u64 {
        self.locked.saturating_sub(self.claimed)
    }

    pub fn credit(&mut self, amount: u64) -> core::result::Result<(), LockError> {
        if amount == 0 {
            return Err(LockError::InvalidAmount);
        }
        self.available = self
            .available
            .checked_add(amount)
            .ok_or(LockError::MathOverflow)?;
        Ok(())
    }

    /// Moves `amount` from `available` into `locked`. Leaves the account
    /// untouched on error.
    pub fn lock(&mut self, amount: u64) -> core::result::Result<(), LockError> {
        if amount == 0 {
            return Err(LockError::InvalidAmount);
        }
        if self.available < amount {
            return Err(LockError::InsufficientBalance);
        }
        let locked = self
            .locked
            .checked_add(amount)
            .ok_or(LockError::MathOverflow)?;
        self.available -= amount;
        self.locked = locked;
        Ok(())
    }

    /// `floor(locked * fraction(now))`.
    pub fn vested_total(
        &self,
        schedule: &VestingSchedule,
        now: i64,
    ) -> core::result::Result<u64, LockError> {
        schedule.fraction(now).apply_floor(self.locked)
    }

    /// Vested but not yet claimed, clamped at zero when `now` moved backwards.
    pub fn claimable(
        &self,
        schedule: &VestingSchedule,
        now: i64,
    ) -> core::result::Result<u64, LockError> {
        Ok(self
            .vested_total(schedule, now)?
            .saturating_sub(self.claimed))
    }

    /// Releases everything claimable at `now`. Returns the amount moved; zero
    /// is a successful no-op.
    pub fn claim(
        &mut self,
        schedule: &VestingSchedule,
        now: i64,
    ) -> core::result::Result<u64, LockError> {
        let amount = self.claimable(schedule, now)?;
        if amount == 0 {
            return Ok(0);
        }
        let claimed = self
            .claimed
            .checked_add(amount)
            .ok_or(LockError::MathOverflow)?;
        let available = self
            .available
            .checked_add(amount)
            .ok_or(LockError::MathOverflow)?;
        self.claimed = claimed;
        self.available = available;
        Ok(amount)
    }
}
