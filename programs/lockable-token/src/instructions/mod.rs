pub mod initialize_ledger;
pub mod create_schedule;
pub mod mint;
pub mod lock;
pub mod claim;
pub mod emit_unlockable_quote;

pub use initialize_ledger::*;
pub use create_schedule::*;
pub use mint::*;
pub use lock::*;
pub use claim::*;
pub use emit_unlockable_quote::*;
