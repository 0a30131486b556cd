//! Linear vesting window shared by every locked balance.
//! - fraction(now) = 0 for now <= start, 1 for now >= end
//! - otherwise (now - start) / (end - start), kept as an exact ratio

use anchor_lang::prelude::*;

use crate::error::LockError;

/// Exact vested ratio `numerator / denominator`, always in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingFraction {
    pub numerator: u64,
    pub denominator: u64,
}

impl VestingFraction {
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };
    pub const ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    /// `floor(amount * self)`. Never exceeds `amount`.
    pub fn apply_floor(&self, amount: u64) -> core::result::Result<u64, LockError> {
        let v = (amount as u128)
            .checked_mul(self.numerator as u128)
            .ok_or(LockError::MathOverflow)?
            / (self.denominator as u128);
        u64::try_from(v).map_err(|_| LockError::MathOverflow)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingSchedule {
    start_ts: i64,
    end_ts: i64,
}

impl VestingSchedule {
    pub const SIZE: usize = 8 + 8;

    pub fn new(start_ts: i64, end_ts: i64) -> core::result::Result<Self, LockError> {
        if end_ts <= start_ts {
            return Err(LockError::InvalidSchedule);
        }
        // The window length must fit the u64 denominator arithmetic.
        end_ts
            .checked_sub(start_ts)
            .ok_or(LockError::InvalidSchedule)?;
        Ok(Self { start_ts, end_ts })
    }

    pub fn start_ts(&self) -> i64 {
        self.start_ts
    }

    pub fn end_ts(&self) -> i64 {
        self.end_ts
    }

    /// Window length. Also sound for values decoded from account data,
    /// which never went through [`VestingSchedule::new`].
    pub fn duration(&self) -> u64 {
        self.end_ts.abs_diff(self.start_ts)
    }

    pub fn fraction(&self, now: i64) -> VestingFraction {
        if now <= self.start_ts {
            return VestingFraction::ZERO;
        }
        if now >= self.end_ts {
            return VestingFraction::ONE;
        }
        VestingFraction {
            numerator: now.abs_diff(self.start_ts),
            denominator: self.duration(),
        }
    }
}
