//! # Ledger Aggregate
//!
//! The [`Ledger`] struct owns all parcel-ledger state: role configuration,
//! the parcel registry, free balances, lock records, and the approved-
//! transferee set. Operations live in the component modules as `impl
//! Ledger` blocks; this module holds the aggregate, its construction,
//! and the precondition helpers the components share.
//!
//! ## Design Decision
//!
//! Roles are fields of an explicit [`LedgerConfig`] carried by each
//! ledger instance, not ambient globals. Tests construct as many
//! isolated ledgers as they need.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use tessera_core::{AccountId, LedgerError, ParcelId};

use crate::lock::LockRecord;
use crate::registry::ParcelRecord;

/// Hard ceiling on total supply across all parcels, in base units.
pub const MAX_SUPPLY: u64 = 1_000_000_000;

// ─── Configuration ──────────────────────────────────────────────────

/// Role holders and global switches for one ledger instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Identity controlling minting, pausing, and parcel registration.
    pub admin: AccountId,
    /// Identity controlling transfer restriction and transferee approval.
    pub compliance_officer: AccountId,
    /// While set, burns, transfers, locks, and unlocks are suspended.
    pub paused: bool,
    /// While set, transfers require the recipient to be an approved transferee.
    pub transfer_restriction_enabled: bool,
    /// Running sum of all free and locked balances.
    pub total_supply: u64,
}

// ─── Ledger ─────────────────────────────────────────────────────────

/// All state of one parcel ledger instance.
///
/// Maps are keyed owner-first so that JSON snapshots serialize as plain
/// nested objects. Absent entries read as zero/absent — queries never
/// insert phantom records.
///
/// State is only reachable through the gated operations and the read
/// accessors — the fields themselves are crate-private. The following
/// does NOT compile, because bypassing the access-control gate would
/// let any consumer seize a role or forge supply:
///
/// ```compile_fail
/// use tessera_core::AccountId;
/// use tessera_ledger::Ledger;
///
/// let mut ledger = Ledger::new(AccountId::new("deployer")).unwrap();
/// // ERROR: field `config` is private
/// ledger.config.admin = AccountId::new("mallory");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    /// Roles and global switches.
    pub(crate) config: LedgerConfig,
    /// Registered parcels and their legal metadata.
    pub(crate) parcels: BTreeMap<ParcelId, ParcelRecord>,
    /// Free balances: owner → parcel → amount.
    pub(crate) balances: BTreeMap<AccountId, BTreeMap<ParcelId, u64>>,
    /// Active locks: owner → parcel → record (at most one per slot).
    pub(crate) locks: BTreeMap<AccountId, BTreeMap<ParcelId, LockRecord>>,
    /// Identities allowed to receive tokens while restriction is enabled.
    pub(crate) approved_transferees: BTreeSet<AccountId>,
}

impl Ledger {
    /// Create a fresh ledger with `deployer` holding both roles.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::ZeroAddress`] if `deployer` is the burn
    /// identity.
    pub fn new(deployer: AccountId) -> Result<Self, LedgerError> {
        if deployer.is_burn() {
            return Err(LedgerError::ZeroAddress);
        }
        Ok(Self {
            config: LedgerConfig {
                admin: deployer.clone(),
                compliance_officer: deployer,
                paused: false,
                transfer_restriction_enabled: false,
                total_supply: 0,
            },
            parcels: BTreeMap::new(),
            balances: BTreeMap::new(),
            locks: BTreeMap::new(),
            approved_transferees: BTreeSet::new(),
        })
    }

    // ─── Queries ────────────────────────────────────────────────────

    /// Sum of all free and locked balances.
    pub fn total_supply(&self) -> u64 {
        self.config.total_supply
    }

    /// Units still mintable before [`MAX_SUPPLY`].
    ///
    /// Saturates at zero: a snapshot whose recorded supply somehow
    /// exceeds the cap reports no headroom instead of wrapping.
    pub fn supply_headroom(&self) -> u64 {
        MAX_SUPPLY.saturating_sub(self.config.total_supply)
    }

    /// Whether state-moving operations are currently suspended.
    pub fn is_paused(&self) -> bool {
        self.config.paused
    }

    /// The current administrator.
    pub fn admin(&self) -> &AccountId {
        &self.config.admin
    }

    /// The current compliance officer.
    pub fn compliance_officer(&self) -> &AccountId {
        &self.config.compliance_officer
    }

    /// Check the supply conservation invariant.
    ///
    /// Verifies that the total-supply scalar equals the sum of all free
    /// and locked balances. This must hold after every successful
    /// operation; auditors and tests call it between operations.
    pub fn check_supply_conservation(&self) -> bool {
        let free: u64 = self
            .balances
            .values()
            .flat_map(|per_parcel| per_parcel.values())
            .sum();
        let locked: u64 = self
            .locks
            .values()
            .flat_map(|per_parcel| per_parcel.values())
            .map(|record| record.amount)
            .sum();
        free + locked == self.config.total_supply
    }

    // ─── Shared precondition helpers ────────────────────────────────

    /// Require `caller` to be the administrator.
    pub(crate) fn require_admin(&self, caller: &AccountId) -> Result<(), LedgerError> {
        if *caller != self.config.admin {
            return Err(LedgerError::NotAuthorized);
        }
        Ok(())
    }

    /// Require `caller` to be the compliance officer.
    pub(crate) fn require_officer(&self, caller: &AccountId) -> Result<(), LedgerError> {
        if *caller != self.config.compliance_officer {
            return Err(LedgerError::NotAuthorized);
        }
        Ok(())
    }

    /// Require the ledger not to be paused.
    pub(crate) fn require_not_paused(&self) -> Result<(), LedgerError> {
        if self.config.paused {
            return Err(LedgerError::Paused);
        }
        Ok(())
    }

    // ─── Shared balance plumbing ────────────────────────────────────

    /// Free balance for an (owner, parcel) slot; absent reads as zero.
    pub(crate) fn free_balance(&self, owner: &AccountId, parcel: ParcelId) -> u64 {
        self.balances
            .get(owner)
            .and_then(|per_parcel| per_parcel.get(&parcel))
            .copied()
            .unwrap_or(0)
    }

    /// Credit an (owner, parcel) slot, creating it on first use.
    ///
    /// Callers have already bounded `amount` against supply headroom, so
    /// the sum cannot overflow `u64`.
    pub(crate) fn credit(&mut self, owner: &AccountId, parcel: ParcelId, amount: u64) {
        let slot = self
            .balances
            .entry(owner.clone())
            .or_default()
            .entry(parcel)
            .or_insert(0);
        *slot += amount;
    }

    /// Debit an (owner, parcel) slot.
    ///
    /// Underflow is checked even though callers validate first, so a
    /// precondition-ordering bug surfaces as an error, never as a wrap.
    pub(crate) fn debit(
        &mut self,
        owner: &AccountId,
        parcel: ParcelId,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let available = self.free_balance(owner, parcel);
        let remaining = available
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance {
                available,
                requested: amount,
            })?;
        if let Some(per_parcel) = self.balances.get_mut(owner) {
            per_parcel.insert(parcel, remaining);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> AccountId {
        AccountId::new("alice")
    }

    #[test]
    fn test_new_ledger_assigns_both_roles_to_deployer() {
        let ledger = Ledger::new(alice()).unwrap();
        assert_eq!(*ledger.admin(), alice());
        assert_eq!(*ledger.compliance_officer(), alice());
        assert!(!ledger.is_paused());
        assert_eq!(ledger.total_supply(), 0);
        assert_eq!(ledger.supply_headroom(), MAX_SUPPLY);
    }

    #[test]
    fn test_burn_identity_cannot_deploy() {
        let result = Ledger::new(AccountId::burn());
        assert_eq!(result.unwrap_err(), LedgerError::ZeroAddress);
    }

    #[test]
    fn test_absent_balance_reads_as_zero() {
        let ledger = Ledger::new(alice()).unwrap();
        assert_eq!(ledger.free_balance(&AccountId::new("bob"), ParcelId(1)), 0);
    }

    #[test]
    fn test_over_cap_supply_reports_zero_headroom_and_blocks_minting() {
        let mut ledger = Ledger::new(alice()).unwrap();
        ledger
            .register_parcel(&alice(), ParcelId(1), "LOT-001", "PK-SIF")
            .unwrap();

        // Simulate a corrupted snapshot whose recorded supply exceeds
        // the cap; arithmetic must saturate, never wrap.
        ledger.config.total_supply = MAX_SUPPLY + 1;
        assert_eq!(ledger.supply_headroom(), 0);

        let result = ledger.mint(&alice(), &alice(), ParcelId(1), 1);
        assert_eq!(
            result.unwrap_err(),
            LedgerError::MaxSupplyReached { headroom: 0, requested: 1 }
        );
    }

    #[test]
    fn test_ledger_snapshot_round_trip() {
        let mut ledger = Ledger::new(alice()).unwrap();
        ledger
            .register_parcel(&alice(), ParcelId(1), "LOT-001", "PK-SIF")
            .unwrap();
        ledger.mint(&alice(), &alice(), ParcelId(1), 500).unwrap();

        let json = serde_json::to_string(&ledger).unwrap();
        let parsed: Ledger = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ledger);
    }
}
