use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, LEDGER_STATE_SEED};
use crate::error::LockError;
use crate::state::{HolderAccount, LedgerState};

pub fn lock(ctx: Context<LockTokens>, amount: u64) -> Result<()> {
    let st = &ctx.accounts.ledger_state;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, LockError::UnauthorizedAdmin);

    let holder_account = HolderAccount::for_lock(ctx.accounts.holder_account.as_mut())?;
    holder_account.balances.lock(amount)?;

    msg!(
        "Locked {} for {} (locked total {})",
        amount,
        holder_account.holder,
        holder_account.balances.locked
    );
    emit!(TokensLocked {
        holder: holder_account.holder,
        amount,
        available: holder_account.balances.available,
        locked: holder_account.balances.locked,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct LockTokens<'info> {
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

    /// CHECK: Only used as a PDA seed.
    pub holder: UncheckedAccount<'info>,

    pub admin: Signer<'info>,
}

#[event]
pub struct TokensLocked {
    pub holder: Pubkey,
    pub amount: u64,
    pub available: u64,
    pub locked: u64,
}
