//! Program-wide constants.

/// Seed prefix of the ledger state PDA (`[LEDGER_STATE_SEED, admin]`).
pub const LEDGER_STATE_SEED: &[u8] = b"ledger_state";

/// Seed prefix of a holder account PDA (`[HOLDER_SEED, ledger_state, holder]`).
pub const HOLDER_SEED: &[u8] = b"holder";
