use anchor_lang::prelude::*;

use crate::constants::LEDGER_STATE_SEED;
use crate::error::LockError;
use crate::ledger::VestingSchedule;
use crate::state::LedgerState;

pub fn create_schedule(ctx: Context<CreateSchedule>, start_ts: i64, end_ts: i64) -> Result<()> {
    let st = &mut ctx.accounts.ledger_state;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, LockError::UnauthorizedAdmin);
    // No reconfiguration once the window is fixed.
    require!(st.schedule.is_none(), LockError::ScheduleAlreadyExists);

    let schedule = VestingSchedule::new(start_ts, end_ts)?;
    st.schedule = Some(schedule);

    emit!(ScheduleCreated {
        admin: st.admin,
        start_ts: schedule.start_ts(),
        end_ts: schedule.end_ts(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateSchedule<'info> {
    #[account(
        mut,
        seeds = [LEDGER_STATE_SEED, ledger_state.admin.as_ref()],
        bump = ledger_state.bump
    )]
    pub ledger_state: Account<'info, LedgerState>,

    pub admin: Signer<'info>,
}

#[event]
pub struct ScheduleCreated {
    pub admin: Pubkey,
    pub start_ts: i64,
    pub end_ts: i64,
}
