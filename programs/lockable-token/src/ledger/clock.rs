//! Time sources for the ledger engine.
//!
//! The engine never samples time on its own. Callers hand it a [`TimeSource`]:
//! on-chain that is the `Clock` sysvar, in tests a [`ManualClock`] that can be
//! moved forward (or backward) at will.

use core::cell::Cell;

use anchor_lang::prelude::*;

use crate::error::LockError;

/// Supplies the current Unix timestamp (seconds).
pub trait TimeSource {
    fn now(&self) -> core::result::Result<i64, LockError>;
}

/// Reads `unix_timestamp` from the runtime `Clock` sysvar.
#[derive(Clone, Copy, Debug, Default)]
pub struct SysvarClock;

impl TimeSource for SysvarClock {
    fn now(&self) -> core::result::Result<i64, LockError> {
        Clock::get()
            .map(|c| c.unix_timestamp)
            .map_err(|_| LockError::ClockUnavailable)
    }
}

/// Clock pinned to a single timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl TimeSource for FixedClock {
    fn now(&self) -> core::result::Result<i64, LockError> {
        Ok(self.0)
    }
}

/// Settable clock for simulations and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    pub fn new(now: i64) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: i64) {
        self.now.set(now);
    }

    /// Moves the clock by `delta` seconds (negative moves it back).
    pub fn advance(&self, delta: i64) {
        self.now.set(self.now.get().saturating_add(delta));
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> core::result::Result<i64, LockError> {
        Ok(self.now.get())
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> core::result::Result<i64, LockError> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_moves_both_ways() {
        let clock = ManualClock::new(1_000);
        assert_eq!(clock.now().unwrap(), 1_000);

        clock.advance(250);
        assert_eq!(clock.now().unwrap(), 1_250);

        clock.advance(-1_000);
        assert_eq!(clock.now().unwrap(), 250);

        clock.set(42);
        assert_eq!(clock.now().unwrap(), 42);
    }

    #[test]
    fn fixed_clock_is_constant() {
        let clock = FixedClock(7);
        assert_eq!(clock.now().unwrap(), 7);
        assert_eq!((&clock).now().unwrap(), 7);
    }
}
