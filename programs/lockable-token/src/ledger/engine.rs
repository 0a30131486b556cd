use std::collections::BTreeMap;

use anchor_lang::prelude::Pubkey;
use bytemuck::Zeroable;

use crate::error::LockError;
use crate::ledger::account::LedgerAccount;
use crate::ledger::clock::TimeSource;
use crate::ledger::schedule::VestingSchedule;

type LedgerResult<T> = core::result::Result<T, LockError>;

/// In-memory lock/vest/claim ledger.
///
/// Owns the schedule, the time source and every holder account. Callers are
/// assumed to have authorized the actor before invoking `credit`, `lock` or
/// `claim`. Each call either commits all of its balance changes or returns an
/// error with no state change.
#[derive(Debug)]
pub struct LockVestLedger<C> {
    clock: C,
    schedule: Option<VestingSchedule>,
    accounts: BTreeMap<Pubkey, LedgerAccount>,
    total_supply: u64,
    total_locked: u64,
    total_claimed: u64,
}

impl<C: TimeSource> LockVestLedger<C> {
    /// Ledger without a schedule; call [`Self::create_schedule`] before
    /// querying or claiming.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            schedule: None,
            accounts: BTreeMap::new(),
            total_supply: 0,
            total_locked: 0,
            total_claimed: 0,
        }
    }

    pub fn with_schedule(clock: C, schedule: VestingSchedule) -> Self {
        let mut ledger = Self::new(clock);
        ledger.schedule = Some(schedule);
        ledger
    }

    pub fn create_schedule(&mut self, start_ts: i64, end_ts: i64) -> LedgerResult<VestingSchedule> {
        if self.schedule.is_some() {
            return Err(LockError::ScheduleAlreadyExists);
        }
        let schedule = VestingSchedule::new(start_ts, end_ts)?;
        self.schedule = Some(schedule);
        Ok(schedule)
    }

    pub fn schedule(&self) -> LedgerResult<&VestingSchedule> {
        self.schedule.as_ref().ok_or(LockError::UnknownSchedule)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn account(&self, holder: &Pubkey) -> LedgerResult<LedgerAccount> {
        self.accounts
            .get(holder)
            .copied()
            .ok_or(LockError::UnknownHolder)
    }

    /// Available balance; zero for holders never seen.
    pub fn balance_of(&self, holder: &Pubkey) -> u64 {
        self.accounts.get(holder).map_or(0, |a| a.available)
    }

    pub fn holders(&self) -> impl Iterator<Item = (&Pubkey, &LedgerAccount)> {
        self.accounts.iter()
    }

    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }

    pub fn total_locked(&self) -> u64 {
        self.total_locked
    }

    pub fn total_claimed(&self) -> u64 {
        self.total_claimed
    }

    /// Mints `amount` into the holder's available balance, opening the
    /// account on first use.
    pub fn credit(&mut self, holder: Pubkey, amount: u64) -> LedgerResult<LedgerAccount> {
        let total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LockError::MathOverflow)?;

        let mut next = self.accounts.get(&holder).copied().unwrap_or_else(LedgerAccount::zeroed);
        next.credit(amount)?;

        self.accounts.insert(holder, next);
        self.total_supply = total_supply;
        Ok(next)
    }

    pub fn lock(&mut self, holder: Pubkey, amount: u64) -> LedgerResult<LedgerAccount> {
        if amount == 0 {
            return Err(LockError::InvalidAmount);
        }
        let mut next = self
            .accounts
            .get(&holder)
            .copied()
            .ok_or(LockError::InsufficientBalance)?;
        next.lock(amount)?;
        let total_locked = self
            .total_locked
            .checked_add(amount)
            .ok_or(LockError::MathOverflow)?;

        self.accounts.insert(holder, next);
        self.total_locked = total_locked;
        Ok(next)
    }

    /// Claimable amount for `holder` at the clock's current time.
    pub fn vested_amount(&self, holder: &Pubkey) -> LedgerResult<u64> {
        let now = self.clock.now()?;
        self.vested_amount_at(holder, now)
    }

    pub fn vested_amount_at(&self, holder: &Pubkey, now: i64) -> LedgerResult<u64> {
        let schedule = self.schedule()?;
        self.account(holder)?.claimable(schedule, now)
    }

    /// Claims at the clock's current time.
    pub fn claim(&mut self, holder: &Pubkey) -> LedgerResult<u64> {
        let now = self.clock.now()?;
        self.claim_at(holder, now)
    }

    pub fn claim_at(&mut self, holder: &Pubkey, now: i64) -> LedgerResult<u64> {
        let schedule = *self.schedule()?;
        let mut next = self.account(holder)?;
        let amount = next.claim(&schedule, now)?;
        if amount == 0 {
            return Ok(0);
        }
        let total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(LockError::MathOverflow)?;

        self.accounts.insert(*holder, next);
        self.total_claimed = total_claimed;
        Ok(amount)
    }
}
