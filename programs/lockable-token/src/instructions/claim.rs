use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, LEDGER_STATE_SEED};
use crate::error::LockError;
use crate::ledger::{SysvarClock, TimeSource};
use crate::state::{HolderAccount, LedgerState};

pub fn claim(ctx: Context<ClaimTokens>) -> Result<()> {
    let schedule = *ctx.accounts.ledger_state.schedule()?;
    let holder_key = ctx.accounts.holder.key();

    let holder_account = HolderAccount::known(ctx.accounts.holder_account.as_mut())?;
    require_keys_eq!(holder_key, holder_account.holder, LockError::UnauthorizedHolder);

    let now = SysvarClock.now()?;
    let amount = holder_account.balances.claim(&schedule, now)?;
    // Nothing newly vested.
    if amount == 0 {
        msg!("Nothing to claim for {}", holder_account.holder);
        return Ok(());
    }

    emit!(TokensClaimed {
        holder: holder_account.holder,
        amount,
        claimed_total: holder_account.balances.claimed,
        locked: holder_account.balances.locked,
        unix_timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimTokens<'info> {
    #[account(
        seeds = [LEDGER_STATE_SEED, ledger_state.admin.as_ref()],
        bump = ledger_state.bump
    )]
    pub ledger_state: Account<'info, LedgerState>,

    /// `None` when the holder was never minted to.
    #[account(
        mut,
        seeds = [HOLDER_SEED, ledger_state.key().as_ref(), holder.key().as_ref()],
        bump
    )]
    pub holder_account: Option<Account<'info, HolderAccount>>,

    pub holder: Signer<'info>,
}

#[event]
pub struct TokensClaimed {
    pub holder: Pubkey,
    pub amount: u64,
    pub claimed_total: u64,
    pub locked: u64,
    pub unix_timestamp: i64,
}
