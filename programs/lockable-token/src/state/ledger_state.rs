use anchor_lang::prelude::*;

use crate::error::LockError;
use crate::ledger::VestingSchedule;

/// Ledger state PDA, one per admin.
///
/// Written only by `initialize_ledger` and `create_schedule`; every per-holder
/// instruction takes it read-only so holders never contend on it.
#[account]
pub struct LedgerState {
    /// Authority allowed to create the schedule, mint and lock.
    pub admin: Pubkey,
    /// Shared vesting window; fixed once set.
    pub schedule: Option<VestingSchedule>,
    pub bump: u8,
}

impl LedgerState {
    pub const SIZE: usize =
        32 +                          // admin
        1 + VestingSchedule::SIZE +   // schedule
        1;                            // bump

    pub fn schedule(&self) -> core::result::Result<&VestingSchedule, LockError> {
        self.schedule.as_ref().ok_or(LockError::UnknownSchedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_no_per_holder_counters() {
        // admin + Option<schedule> + bump
        assert_eq!(LedgerState::SIZE, 32 + 1 + 16 + 1);
    }

    #[test]
    fn missing_schedule_is_unknown() {
        let st = LedgerState {
            admin: Pubkey::new_from_array([3; 32]),
            schedule: None,
            bump: 254,
        };
        assert!(matches!(st.schedule(), Err(LockError::UnknownSchedule)));
    }
}
