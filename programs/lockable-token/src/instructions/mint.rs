use anchor_lang::prelude::*;

use crate::constants::{HOLDER_SEED, LEDGER_STATE_SEED};
use crate::error::LockError;
use crate::ledger::LedgerAccount;
use crate::state::{HolderAccount, LedgerState};

pub fn mint(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, LockError::InvalidAmount);

    let ledger_key = ctx.accounts.ledger_state.key();
    let st = &ctx.accounts.ledger_state;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, LockError::UnauthorizedAdmin);

    // First reference opens the account with zero balances.
    let holder_account = &mut ctx.accounts.holder_account;
    if holder_account.ledger == Pubkey::default() {
        holder_account.ledger = ledger_key;
        holder_account.holder = ctx.accounts.holder.key();
        holder_account.balances = LedgerAccount::default();
        holder_account.bump = ctx.bumps.holder_account;
    }

    holder_account.balances.credit(amount)?;

    emit!(TokensMinted {
        holder: holder_account.holder,
        amount,
        available: holder_account.balances.available,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct MintTokens<'info> {
    #[account(
        seeds = [LEDGER_STATE_SEED, ledger_state.admin.as_ref()],
        bump = ledger_state.bump
    )]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + HolderAccount::SIZE,
        seeds = [HOLDER_SEED, ledger_state.key().as_ref(), holder.key().as_ref()],
        bump
    )]
    pub holder_account: Account<'info, HolderAccount>,

    /// CHECK: Only used as a PDA seed and recorded as the holder identity.
    pub holder: UncheckedAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokensMinted {
    pub holder: Pubkey,
    pub amount: u64,
    pub available: u64,
}
