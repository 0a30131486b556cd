use anchor_lang::prelude::*;

use crate::constants::LEDGER_STATE_SEED;
use crate::state::LedgerState;

pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
    let st = &mut ctx.accounts.ledger_state;
    st.admin = ctx.accounts.admin.key();
    st.schedule = None;
    st.bump = ctx.bumps.ledger_state;

    msg!("Ledger initialized for admin {}", st.admin);
    emit!(LedgerInitialized { admin: st.admin });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + LedgerState::SIZE,
        seeds = [LEDGER_STATE_SEED, admin.key().as_ref()],
        bump
    )]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
}
