pub mod holder_account;
pub mod ledger_state;

pub use holder_account::*;
pub use ledger_state::*;
