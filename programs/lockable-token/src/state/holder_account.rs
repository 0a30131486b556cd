use anchor_lang::prelude::*;

use crate::error::LockError;
use crate::ledger::LedgerAccount;

/// Holder account PDA. Each holder gets its own account so writes against
/// one holder never contend with another.
#[account]
pub struct HolderAccount {
    pub ledger: Pubkey,
    pub holder: Pubkey,
    pub balances: LedgerAccount,
    pub bump: u8,
}

impl HolderAccount {
    pub const SIZE: usize =
        32 +                   // ledger
        32 +                   // holder
        LedgerAccount::SIZE +  // balances
        1;                     // bump

    /// A holder never minted to has nothing to lock.
    pub fn for_lock<T>(account: Option<T>) -> core::result::Result<T, LockError> {
        account.ok_or(LockError::InsufficientBalance)
    }

    /// Claims and quotes need an opened account.
    pub fn known<T>(account: Option<T>) -> core::result::Result<T, LockError> {
        account.ok_or(LockError::UnknownHolder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::VestingSchedule;

    fn opened(available: u64) -> HolderAccount {
        HolderAccount {
            ledger: Pubkey::new_from_array([1; 32]),
            holder: Pubkey::new_from_array([2; 32]),
            balances: LedgerAccount {
                available,
                ..LedgerAccount::default()
            },
            bump: 255,
        }
    }

    #[test]
    fn missing_holder_cannot_lock() {
        let missing: Option<&mut HolderAccount> = None;
        assert!(matches!(
            HolderAccount::for_lock(missing),
            Err(LockError::InsufficientBalance)
        ));
    }

    #[test]
    fn missing_holder_is_unknown_for_claim_and_quote() {
        let missing: Option<&HolderAccount> = None;
        assert!(matches!(
            HolderAccount::known(missing),
            Err(LockError::UnknownHolder)
        ));
    }

    #[test]
    fn opened_holder_locks_and_claims() {
        let schedule = VestingSchedule::new(0, 100).unwrap();
        let mut account = opened(1_000);

        let target = HolderAccount::for_lock(Some(&mut account)).unwrap();
        target.balances.lock(1_000).unwrap();

        let target = HolderAccount::known(Some(&mut account)).unwrap();
        assert_eq!(target.balances.claim(&schedule, 50).unwrap(), 500);
        assert_eq!(account.balances.unclaimed(), 500);
        assert_eq!(account.balances.available, 500);
    }
}
