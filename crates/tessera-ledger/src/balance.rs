//! # Balance Ledger
//!
//! Free balances per (owner, parcel) slot and the running total-supply
//! scalar. Minting is bounded by the global supply cap; burning and
//! transferring are bounded by the caller's free balance and blocked
//! outright while the caller holds an active lock on the slot.
//!
//! Check order per operation is fixed: role/pause gate, recipient
//! validity, parcel registration, compliance gate, balance bound, lock
//! exclusion — the first failure aborts with no state written.

use tessera_core::{AccountId, LedgerError, ParcelId};

use crate::ledger::{Ledger, MAX_SUPPLY};

impl Ledger {
    /// Mint `amount` units of `parcel` to `recipient`. Admin only.
    ///
    /// Minting stays available while the ledger is paused — the pause
    /// switch suspends holder-initiated movement, not administration.
    /// There is no per-mint cap beyond the global ceiling.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::NotAuthorized`] if `caller` is not the admin.
    /// - [`LedgerError::ZeroAddress`] if `recipient` is the burn identity.
    /// - [`LedgerError::InvalidParcel`] if `parcel` is not registered.
    /// - [`LedgerError::MaxSupplyReached`] if the mint would push total
    ///   supply past [`MAX_SUPPLY`].
    pub fn mint(
        &mut self,
        caller: &AccountId,
        recipient: &AccountId,
        parcel: ParcelId,
        amount: u64,
    ) -> Result<(), LedgerError> {
        self.require_admin(caller)?;
        if recipient.is_burn() {
            return Err(LedgerError::ZeroAddress);
        }
        self.assert_registered(parcel)?;

        let headroom = MAX_SUPPLY.saturating_sub(self.config.total_supply);
        if amount > headroom {
            return Err(LedgerError::MaxSupplyReached {
                headroom,
                requested: amount,
            });
        }

        self.credit(recipient, parcel, amount);
        self.config.total_supply += amount;
        Ok(())
    }

    /// Burn `amount` units of `parcel` from the caller's free balance.
    ///
    /// An active lock on the slot blocks the burn entirely, even when
    /// the free balance alone would cover the amount.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::Paused`] while the ledger is paused.
    /// - [`LedgerError::InvalidParcel`] if `parcel` is not registered.
    /// - [`LedgerError::InsufficientBalance`] if the free balance is
    ///   smaller than `amount`.
    /// - [`LedgerError::LockPresent`] if the caller holds an active lock
    ///   on this slot.
    pub fn burn(
        &mut self,
        caller: &AccountId,
        parcel: ParcelId,
        amount: u64,
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
            return Err(LedgerError::LockPresent);
        }

        self.debit(caller, parcel, amount)?;
        self.config.total_supply -= amount;
        Ok(())
    }

    /// Move `amount` units of `parcel` from the caller to `recipient`.
    ///
    /// Total supply is unchanged. Self-transfer is permitted — it is a
    /// net no-op but still passes every gate.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::Paused`] while the ledger is paused.
    /// - [`LedgerError::ZeroAddress`] if `recipient` is the burn identity.
    /// - [`LedgerError::InvalidParcel`] if `parcel` is not registered.
    /// - [`LedgerError::TransferRestricted`] if restriction is enabled
    ///   and `recipient` is not an approved transferee.
    /// - [`LedgerError::InsufficientBalance`] if the free balance is
    ///   smaller than `amount`.
    /// - [`LedgerError::LockPresent`] if the caller holds an active lock
    ///   on this slot.
    pub fn transfer(
        &mut self,
        caller: &AccountId,
        recipient: &AccountId,
        parcel: ParcelId,
        amount: u64,
    ) -> Result<(), LedgerError> {
        self.require_not_paused()?;
        if recipient.is_burn() {
            return Err(LedgerError::ZeroAddress);
        }
        self.assert_registered(parcel)?;
        if self.config.transfer_restriction_enabled
            && !self.approved_transferees.contains(recipient)
        {
            return Err(LedgerError::TransferRestricted(recipient.clone()));
        }

        let available = self.free_balance(caller, parcel);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                available,
                requested: amount,
            });
        }
        if self.active_lock(caller, parcel).is_some() {
            return Err(LedgerError::LockPresent);
        }

        self.debit(caller, parcel, amount)?;
        self.credit(recipient, parcel, amount);
        Ok(())
    }

    /// Free balance for an (account, parcel) slot. Never fails.
    pub fn balance_of(&self, account: &AccountId, parcel: ParcelId) -> u64 {
        self.free_balance(account, parcel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::BlockHeight;

    fn admin() -> AccountId {
        AccountId::new("admin")
    }

    fn alice() -> AccountId {
        AccountId::new("alice")
    }

    fn bob() -> AccountId {
        AccountId::new("bob")
    }

    const PARCEL: ParcelId = ParcelId(1);

    /// Ledger with parcel 1 registered and 500 units minted to alice.
    fn seeded_ledger() -> Ledger {
        let mut ledger = Ledger::new(admin()).unwrap();
        ledger
            .register_parcel(&admin(), PARCEL, "LOT-001", "PK-SIF")
            .unwrap();
        ledger.mint(&admin(), &alice(), PARCEL, 500).unwrap();
        ledger
    }

    // ── Mint ─────────────────────────────────────────────────────────

    #[test]
    fn test_mint_credits_recipient_and_supply() {
        let ledger = seeded_ledger();
        assert_eq!(ledger.balance_of(&alice(), PARCEL), 500);
        assert_eq!(ledger.total_supply(), 500);
    }

    #[test]
    fn test_mint_is_admin_gated() {
        let mut ledger = seeded_ledger();
        let result = ledger.mint(&alice(), &alice(), PARCEL, 1);
        assert_eq!(result.unwrap_err(), LedgerError::NotAuthorized);
    }

    #[test]
    fn test_mint_rejects_burn_recipient() {
        let mut ledger = seeded_ledger();
        let result = ledger.mint(&admin(), &AccountId::burn(), PARCEL, 1);
        assert_eq!(result.unwrap_err(), LedgerError::ZeroAddress);
    }

    #[test]
    fn test_mint_requires_registered_parcel() {
        let mut ledger = seeded_ledger();
        let result = ledger.mint(&admin(), &alice(), ParcelId(2), 1);
        assert_eq!(result.unwrap_err(), LedgerError::InvalidParcel(ParcelId(2)));
    }

    #[test]
    fn test_mint_respects_supply_cap() {
        let mut ledger = seeded_ledger();
        let headroom = ledger.supply_headroom();

        let result = ledger.mint(&admin(), &bob(), PARCEL, headroom + 1);
        assert_eq!(
            result.unwrap_err(),
            LedgerError::MaxSupplyReached {
                headroom,
                requested: headroom + 1,
            }
        );
        // Failed mint left state unchanged.
        assert_eq!(ledger.balance_of(&bob(), PARCEL), 0);
        assert_eq!(ledger.total_supply(), 500);

        // Exactly the remaining headroom succeeds.
        ledger.mint(&admin(), &bob(), PARCEL, headroom).unwrap();
        assert_eq!(ledger.total_supply(), MAX_SUPPLY);
        assert_eq!(ledger.supply_headroom(), 0);
    }

    #[test]
    fn test_mint_is_allowed_while_paused() {
        let mut ledger = seeded_ledger();
        ledger.set_paused(&admin(), true).unwrap();
        ledger.mint(&admin(), &alice(), PARCEL, 10).unwrap();
        assert_eq!(ledger.balance_of(&alice(), PARCEL), 510);
    }

    // ── Burn ─────────────────────────────────────────────────────────

    #[test]
    fn test_burn_debits_balance_and_supply() {
        let mut ledger = seeded_ledger();
        ledger.burn(&alice(), PARCEL, 200).unwrap();
        assert_eq!(ledger.balance_of(&alice(), PARCEL), 300);
        assert_eq!(ledger.total_supply(), 300);
    }

    #[test]
    fn test_burn_bounded_by_balance() {
        let mut ledger = seeded_ledger();
        let result = ledger.burn(&alice(), PARCEL, 501);
        assert_eq!(
            result.unwrap_err(),
            LedgerError::InsufficientBalance {
                available: 500,
                requested: 501,
            }
        );
        assert_eq!(ledger.total_supply(), 500);
    }

    #[test]
    fn test_burn_blocked_by_any_lock() {
        let mut ledger = seeded_ledger();
        ledger
            .lock_tokens(&alice(), PARCEL, 100, BlockHeight(10))
            .unwrap();

        // Free balance (400) covers the burn, but the lock blocks it outright.
        let result = ledger.burn(&alice(), PARCEL, 50);
        assert_eq!(result.unwrap_err(), LedgerError::LockPresent);
        assert_eq!(ledger.balance_of(&alice(), PARCEL), 400);
    }

    #[test]
    fn test_burn_rejected_while_paused() {
        let mut ledger = seeded_ledger();
        ledger.set_paused(&admin(), true).unwrap();
        assert_eq!(ledger.burn(&alice(), PARCEL, 1).unwrap_err(), LedgerError::Paused);
    }

    // ── Transfer ─────────────────────────────────────────────────────

    #[test]
    fn test_transfer_moves_amount_supply_unchanged() {
        let mut ledger = seeded_ledger();
        ledger.transfer(&alice(), &bob(), PARCEL, 150).unwrap();
        assert_eq!(ledger.balance_of(&alice(), PARCEL), 350);
        assert_eq!(ledger.balance_of(&bob(), PARCEL), 150);
        assert_eq!(ledger.total_supply(), 500);
    }

    #[test]
    fn test_self_transfer_is_a_gated_no_op() {
        let mut ledger = seeded_ledger();
        ledger.transfer(&alice(), &alice(), PARCEL, 100).unwrap();
        assert_eq!(ledger.balance_of(&alice(), PARCEL), 500);

        // Still subject to every gate.
        ledger.set_paused(&admin(), true).unwrap();
        assert_eq!(
            ledger.transfer(&alice(), &alice(), PARCEL, 100).unwrap_err(),
            LedgerError::Paused
        );
    }

    #[test]
    fn test_transfer_bounded_by_balance() {
        let mut ledger = seeded_ledger();
        let result = ledger.transfer(&alice(), &bob(), PARCEL, 600);
        assert_eq!(
            result.unwrap_err(),
            LedgerError::InsufficientBalance {
                available: 500,
                requested: 600,
            }
        );
        assert_eq!(ledger.balance_of(&bob(), PARCEL), 0);
    }

    #[test]
    fn test_transfer_blocked_by_lock() {
        let mut ledger = seeded_ledger();
        ledger
            .lock_tokens(&alice(), PARCEL, 100, BlockHeight(10))
            .unwrap();
        let result = ledger.transfer(&alice(), &bob(), PARCEL, 50);
        assert_eq!(result.unwrap_err(), LedgerError::LockPresent);
    }

    #[test]
    fn test_transfer_restriction_gate() {
        let mut ledger = seeded_ledger();
        ledger.set_transfer_restriction(&admin(), true).unwrap();

        let result = ledger.transfer(&alice(), &bob(), PARCEL, 100);
        assert_eq!(result.unwrap_err(), LedgerError::TransferRestricted(bob()));
        assert_eq!(ledger.balance_of(&bob(), PARCEL), 0);

        // Approval unblocks the identical transfer.
        ledger.approve_transferee(&admin(), bob()).unwrap();
        ledger.transfer(&alice(), &bob(), PARCEL, 100).unwrap();
        assert_eq!(ledger.balance_of(&alice(), PARCEL), 400);
        assert_eq!(ledger.balance_of(&bob(), PARCEL), 100);
        assert_eq!(ledger.total_supply(), 500);
    }

    #[test]
    fn test_transfer_rejects_burn_recipient() {
        let mut ledger = seeded_ledger();
        let result = ledger.transfer(&alice(), &AccountId::burn(), PARCEL, 1);
        assert_eq!(result.unwrap_err(), LedgerError::ZeroAddress);
    }

    #[test]
    fn test_zero_amount_operations_pass_gates() {
        let mut ledger = seeded_ledger();
        ledger.mint(&admin(), &bob(), PARCEL, 0).unwrap();
        ledger.burn(&alice(), PARCEL, 0).unwrap();
        ledger.transfer(&alice(), &bob(), PARCEL, 0).unwrap();
        assert_eq!(ledger.balance_of(&alice(), PARCEL), 500);
        assert_eq!(ledger.balance_of(&bob(), PARCEL), 0);
        assert_eq!(ledger.total_supply(), 500);
    }
}
