use anchor_lang::prelude::Pubkey;
use lockable_token::error::LockError;
use lockable_token::ledger::{LockVestLedger, ManualClock, VestingSchedule};

const START: i64 = 1_700_000_000;
const WINDOW: i64 = 1_000;

fn alice() -> Pubkey {
    Pubkey::new_from_array([0xA1; 32])
}

fn bob() -> Pubkey {
    Pubkey::new_from_array([0xB0; 32])
}

fn setup() -> LockVestLedger<ManualClock> {
    let schedule = VestingSchedule::new(START, START + WINDOW).unwrap();
    LockVestLedger::with_schedule(ManualClock::new(START - 10), schedule)
}

#[test]
fn mint() {
    let mut ledger = setup();
    ledger.credit(alice(), 1_000).unwrap();
    assert_eq!(ledger.balance_of(&alice()), 1_000);
}

#[test]
fn lock_and_claim_over_the_window() {
    let mut ledger = setup();
    ledger.credit(alice(), 1_000).unwrap();
    let account = ledger.lock(alice(), 1_000).unwrap();
    assert_eq!(account.available, 0);
    assert_eq!(account.locked, 1_000);

    // Before the window opens nothing is unlockable.
    assert_eq!(ledger.vested_amount(&alice()).unwrap(), 0);
    assert_eq!(ledger.claim(&alice()).unwrap(), 0);

    // 50%.
    ledger.clock().set(START + WINDOW / 2);
    assert_eq!(ledger.vested_amount(&alice()).unwrap(), 500);
    assert_eq!(ledger.claim(&alice()).unwrap(), 500);
    assert_eq!(ledger.account(&alice()).unwrap().claimed, 500);
    assert_eq!(ledger.vested_amount(&alice()).unwrap(), 0);
    assert_eq!(ledger.balance_of(&alice()), 500);

    // 75%.
    ledger.clock().advance(WINDOW / 4);
    assert_eq!(ledger.vested_amount(&alice()).unwrap(), 250);

    // 100%.
    ledger.clock().advance(WINDOW / 4);
    assert_eq!(ledger.vested_amount(&alice()).unwrap(), 500);
    assert_eq!(ledger.claim(&alice()).unwrap(), 500);
    assert_eq!(ledger.claim(&alice()).unwrap(), 0);

    let account = ledger.account(&alice()).unwrap();
    assert_eq!(account.available, 1_000);
    assert_eq!(account.locked, 1_000);
    assert_eq!(account.claimed, 1_000);
    assert_eq!(ledger.total_claimed(), 1_000);
}

#[test]
fn lock_more_than_balance() {
    let mut ledger = setup();
    ledger.credit(alice(), 1_000).unwrap();

    let err = ledger.lock(alice(), 1_001).unwrap_err();
    assert!(matches!(err, LockError::InsufficientBalance));

    let account = ledger.account(&alice()).unwrap();
    assert_eq!(account.available, 1_000);
    assert_eq!(account.locked, 0);
    assert_eq!(account.claimed, 0);
}

#[test]
fn holders_vest_on_the_shared_schedule() {
    let mut ledger = setup();
    ledger.credit(alice(), 1_000).unwrap();
    ledger.credit(bob(), 3_000).unwrap();
    ledger.lock(alice(), 1_000).unwrap();
    ledger.lock(bob(), 2_000).unwrap();

    ledger.clock().set(START + 100);
    assert_eq!(ledger.vested_amount(&alice()).unwrap(), 100);
    assert_eq!(ledger.vested_amount(&bob()).unwrap(), 200);

    ledger.claim(&bob()).unwrap();
    assert_eq!(ledger.vested_amount(&alice()).unwrap(), 100);
    assert_eq!(ledger.balance_of(&bob()), 1_200);
}

#[test]
fn inverted_schedule_is_rejected() {
    assert!(matches!(
        VestingSchedule::new(START, START),
        Err(LockError::InvalidSchedule)
    ));
    assert!(matches!(
        VestingSchedule::new(START, START - WINDOW),
        Err(LockError::InvalidSchedule)
    ));
}
