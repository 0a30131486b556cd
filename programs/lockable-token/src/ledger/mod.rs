//! Lock/vest/claim accounting, independent of the Solana runtime.

pub mod account;
pub mod clock;
pub mod engine;
pub mod schedule;

pub use account::LedgerAccount;
pub use clock::{FixedClock, ManualClock, SysvarClock, TimeSource};
pub use engine::LockVestLedger;
pub use schedule::{VestingFraction, VestingSchedule};
