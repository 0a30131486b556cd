use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, LEDGER_STATE_SEED};
use crate::ledger::{SysvarClock, TimeSource};
use crate::state::{HolderAccount, LedgerState};

pub fn emit_unlockable_quote(ctx: Context<EmitUnlockableQuote>) -> Result<()> {
    let st = &ctx.accounts.ledger_state;
    let schedule = st.schedule()?;
    let holder_account = HolderAccount::known(ctx.accounts.holder_account.as_ref())?;
    let now = SysvarClock.now()?;

    let balances = &holder_account.balances;
    let vested_total = balances.vested_total(schedule, now)?;
    let unlockable = balances.claimable(schedule, now)?;

    emit!(UnlockableQuote {
        holder: holder_account.holder,
        unix_timestamp: now,
        locked: balances.locked,
        vested_total,
        claimed: balances.claimed,
        unclaimed: balances.unclaimed(),
        unlockable,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitUnlockableQuote<'info> {
    #[account(
        seeds = [LEDGER_STATE_SEED, ledger_state.admin.as_ref()],
        bump = ledger_state.bump
    )]
    pub ledger_state: Account<'info, LedgerState>,

    /// `None` when the holder was never minted to.
    #[account(
        seeds = [HOLDER_SEED, ledger_state.key().as_ref(), holder.key().as_ref()],
        bump
    )]
    pub holder_account: Option<Account<'info, HolderAccount>>,

    /// CHECK: Only used as a PDA seed.
    pub holder: UncheckedAccount<'info>,
}

#[event]
pub struct UnlockableQuote {
    pub holder: Pubkey,
    pub unix_timestamp: i64,
    pub locked: u64,
    pub vested_total: u64,
    pub claimed: u64,
    /// Locked value not yet claimed, vested or not.
    pub unclaimed: u64,
    pub unlockable: u64,
}
