use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod state;

pub use instructions::*;

declare_id!("4NQcXzVXgmPvS2dAe6rK8vNqW9y3ZKf8hBwQ1n3TqL7d");

#[program]
pub mod lockable_token {
    use super::*;

    pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
        instructions::initialize_ledger(ctx)
    }

    pub fn create_schedule(ctx: Context<CreateSchedule>, start_ts: i64, end_ts: i64) -> Result<()> {
        instructions::create_schedule(ctx, start_ts, end_ts)
    }

    pub fn mint(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
        instructions::mint(ctx, amount)
    }

    pub fn lock(ctx: Context<LockTokens>, amount: u64) -> Result<()> {
        instructions::lock(ctx, amount)
    }

    pub fn claim(ctx: Context<ClaimTokens>) -> Result<()> {
        instructions::claim(ctx)
    }

    /// Emits the currently unlockable amount for a holder.
    pub fn emit_unlockable_quote(ctx: Context<EmitUnlockableQuote>) -> Result<()> {
        instructions::emit_unlockable_quote(ctx)
    }
}
