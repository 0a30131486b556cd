use anchor_lang::prelude::*;

/// Error codes shared by the ledger engine and the program instructions.
#[error_code]
pub enum LockError {
    #[msg("Invalid schedule: end timestamp must be after start timestamp")]
    InvalidSchedule,

    #[msg("Vesting schedule already exists")]
    ScheduleAlreadyExists,

    #[msg("Vesting schedule has not been created")]
    UnknownSchedule,

    #[msg("Holder has no ledger account")]
    UnknownHolder,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Insufficient available balance")]
    InsufficientBalance,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Clock sysvar unavailable")]
    ClockUnavailable,

    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Unauthorized: holder signature required")]
    UnauthorizedHolder,
}
