//! # Lock Manager & Compliance Gate
//!
//! Time-locks move tokens out of an owner's free balance into a single
//! lock record per (owner, parcel) slot until a target block height is
//! reached. The lock is a regulatory hold, not a concurrency primitive.
//!
//! ## Lock Slot State Machine
//!
//! ```text
//! Unlocked ──lock_tokens()──▶ Locked(amount, unlock_height)
//!     ▲                              │
//!     └──────unlock_tokens()─────────┘   (only at height ≥ unlock_height)
//! ```
//!
//! No other transitions exist: locking an already-locked slot fails, as
//! does unlocking an empty one.
//!
//! ## Maturity Is Not Validated at Creation
//!
//! `lock_tokens` accepts any `unlock_height`, including one at or below
//! the current height — such a lock is immediately unlockable. This
//! supports record-keeping holds and is deliberate, observable behavior,
//! covered by tests rather than silently rejected.
//!
//! The compliance gate lives here too: the allow-list of identities
//! permitted to receive tokens while transfer restriction is enabled.

use serde::{Deserialize, Serialize};

use tessera_core::{AccountId, BlockHeight, LedgerError, ParcelId};

use crate::ledger::Ledger;

/// An active time-lock on one (owner, parcel) slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockRecord {
    /// Units held out of the free balance.
    pub amount: u64,
    /// Height at which the hold matures and becomes unlockable.
    pub unlock_height: BlockHeight,
}

impl Ledger {
    /// Hold `amount` units of the caller's free balance until `unlock_height`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::Paused`] while the ledger is paused.
    /// - [`LedgerError::InvalidParcel`] if `parcel` is not registered.
    /// - [`LedgerError::InsufficientBalance`] if the free balance is
    ///   smaller than `amount`.
    /// - [`LedgerError::AlreadyLocked`] if a lock already exists for
    ///   this slot — at most one lock per (owner, parcel).
    pub fn lock_tokens(
        &mut self,
        caller: &AccountId,
        parcel: ParcelId,
        amount: u64,
        unlock_height: BlockHeight,
    ) -> Result<(), LedgerError> {
        self.require_not_paused()?;
        self.assert_registered(parcel)?;

        let available = self.free_balance(caller, parcel);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                available,
                requested: amount,
            });
        }
        if self.active_lock(caller, parcel).is_some() {
            return Err(LedgerError::AlreadyLocked);
        }

        self.debit(caller, parcel, amount)?;
        self.locks
            .entry(caller.clone())
            .or_default()
            .insert(parcel, LockRecord { amount, unlock_height });
        Ok(())
    }

    /// Release a matured lock back into the caller's free balance.
    ///
    /// The lock record is deleted; the slot returns to the unlocked
    /// state and can be locked again.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::Paused`] while the ledger is paused.
    /// - [`LedgerError::InvalidParcel`] if `parcel` is not registered.
    /// - [`LedgerError::NoActiveLock`] if no lock with a positive amount
    ///   exists for this slot.
    /// - [`LedgerError::LockNotMatured`] if `current_height` is below
    ///   the lock's maturity height.
    pub fn unlock_tokens(
        &mut self,
        caller: &AccountId,
        parcel: ParcelId,
        current_height: BlockHeight,
    ) -> Result<(), LedgerError> {
        self.require_not_paused()?;
        self.assert_registered(parcel)?;

        let record = match self.active_lock(caller, parcel) {
            Some(record) if record.amount > 0 => *record,
            _ => return Err(LedgerError::NoActiveLock),
        };
        if !current_height.has_reached(record.unlock_height) {
            return Err(LedgerError::LockNotMatured {
                unlock_height: record.unlock_height,
                current: current_height,
            });
        }

        if let Some(per_parcel) = self.locks.get_mut(caller) {
            per_parcel.remove(&parcel);
        }
        self.credit(caller, parcel, record.amount);
        Ok(())
    }

    /// Add `transferee` to the compliance allow-list. Officer only.
    ///
    /// Re-approving an already approved identity is an idempotent
    /// success.
    pub fn approve_transferee(
        &mut self,
        caller: &AccountId,
        transferee: AccountId,
    ) -> Result<(), LedgerError> {
        self.require_officer(caller)?;
        self.approved_transferees.insert(transferee);
        Ok(())
    }

    /// Remove `transferee` from the compliance allow-list. Officer only.
    ///
    /// Removing an identity that was never approved is an idempotent
    /// success — the gate only consults membership.
    pub fn revoke_transferee(
        &mut self,
        caller: &AccountId,
        transferee: &AccountId,
    ) -> Result<(), LedgerError> {
        self.require_officer(caller)?;
        self.approved_transferees.remove(transferee);
        Ok(())
    }

    // ─── Queries ────────────────────────────────────────────────────

    /// Locked amount for an (account, parcel) slot; zero if no lock.
    pub fn locked_balance(&self, account: &AccountId, parcel: ParcelId) -> u64 {
        self.active_lock(account, parcel)
            .map(|record| record.amount)
            .unwrap_or(0)
    }

    /// Whether the transfer-restriction toggle is currently enabled.
    pub fn is_transfer_restricted(&self) -> bool {
        self.config.transfer_restriction_enabled
    }

    /// Whether `account` may receive tokens while restriction is enabled.
    pub fn is_approved_transferee(&self, account: &AccountId) -> bool {
        self.approved_transferees.contains(account)
    }

    /// The lock record for an (owner, parcel) slot, if one exists.
    pub(crate) fn active_lock(&self, owner: &AccountId, parcel: ParcelId) -> Option<&LockRecord> {
        self.locks
            .get(owner)
            .and_then(|per_parcel| per_parcel.get(&parcel))
    }
}
