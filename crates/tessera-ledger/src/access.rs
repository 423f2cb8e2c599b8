//! # Access Control Gate
//!
//! Role administration for one ledger instance: handing over the
//! administrator role, appointing the compliance officer, the pause
//! switch, and the transfer-restriction toggle.
//!
//! Role handovers are immediate and unconditional — there is no
//! two-step accept protocol. Setting a switch to its current value is
//! an idempotent success.

use tessera_core::{AccountId, LedgerError};

use crate::ledger::Ledger;

impl Ledger {
    /// Hand the administrator role to `new_admin`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::NotAuthorized`] if `caller` is not the admin.
    /// - [`LedgerError::ZeroAddress`] if `new_admin` is the burn identity.
    pub fn transfer_admin(
        &mut self,
        caller: &AccountId,
        new_admin: AccountId,
    ) -> Result<(), LedgerError> {
        self.require_admin(caller)?;
        if new_admin.is_burn() {
            return Err(LedgerError::ZeroAddress);
        }
        self.config.admin = new_admin;
        Ok(())
    }

    /// Appoint `new_officer` as compliance officer.
    ///
    /// Only the admin appoints the officer — the sitting officer cannot
    /// replace themselves.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::NotAuthorized`] if `caller` is not the admin.
    /// - [`LedgerError::ZeroAddress`] if `new_officer` is the burn identity.
    pub fn set_compliance_officer(
        &mut self,
        caller: &AccountId,
        new_officer: AccountId,
    ) -> Result<(), LedgerError> {
        self.require_admin(caller)?;
        if new_officer.is_burn() {
            return Err(LedgerError::ZeroAddress);
        }
        self.config.compliance_officer = new_officer;
        Ok(())
    }

    /// Set the pause switch. Admin only.
    ///
    /// While paused, burns, transfers, locks, and unlocks are rejected
    /// with [`LedgerError::Paused`]; minting and role administration
    /// remain available.
    pub fn set_paused(&mut self, caller: &AccountId, paused: bool) -> Result<(), LedgerError> {
        self.require_admin(caller)?;
        self.config.paused = paused;
        Ok(())
    }

    /// Set the transfer-restriction toggle. Compliance officer only.
    ///
    /// While enabled, transfers require the recipient to appear in the
    /// approved-transferee set.
    pub fn set_transfer_restriction(
        &mut self,
        caller: &AccountId,
        enabled: bool,
    ) -> Result<(), LedgerError> {
        self.require_officer(caller)?;
        self.config.transfer_restriction_enabled = enabled;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployer() -> AccountId {
        AccountId::new("deployer")
    }

    fn make_ledger() -> Ledger {
        Ledger::new(deployer()).unwrap()
    }

    #[test]
    fn test_admin_handover() {
        let mut ledger = make_ledger();
        let new_admin = AccountId::new("new-admin");
        ledger.transfer_admin(&deployer(), new_admin.clone()).unwrap();
        assert_eq!(*ledger.admin(), new_admin);

        // The old admin lost the role with the handover.
        let result = ledger.set_paused(&deployer(), true);
        assert_eq!(result.unwrap_err(), LedgerError::NotAuthorized);
    }

    #[test]
    fn test_non_admin_cannot_hand_over() {
        let mut ledger = make_ledger();
        let result = ledger.transfer_admin(&AccountId::new("mallory"), AccountId::new("mallory"));
        assert_eq!(result.unwrap_err(), LedgerError::NotAuthorized);
        assert_eq!(*ledger.admin(), deployer());
    }

    #[test]
    fn test_burn_identity_cannot_hold_a_role() {
        let mut ledger = make_ledger();
        assert_eq!(
            ledger.transfer_admin(&deployer(), AccountId::burn()).unwrap_err(),
            LedgerError::ZeroAddress
        );
        assert_eq!(
            ledger
                .set_compliance_officer(&deployer(), AccountId::burn())
                .unwrap_err(),
            LedgerError::ZeroAddress
        );
    }

    #[test]
    fn test_officer_appointment_is_admin_gated() {
        let mut ledger = make_ledger();
        let officer = AccountId::new("officer");
        ledger.set_compliance_officer(&deployer(), officer.clone()).unwrap();
        assert_eq!(*ledger.compliance_officer(), officer);

        // The sitting officer cannot appoint a successor.
        let result = ledger.set_compliance_officer(&officer, AccountId::new("next"));
        assert_eq!(result.unwrap_err(), LedgerError::NotAuthorized);
    }

    #[test]
    fn test_pause_switch() {
        let mut ledger = make_ledger();
        ledger.set_paused(&deployer(), true).unwrap();
        assert!(ledger.is_paused());

        // Idempotent re-set.
        ledger.set_paused(&deployer(), true).unwrap();
        assert!(ledger.is_paused());

        ledger.set_paused(&deployer(), false).unwrap();
        assert!(!ledger.is_paused());
    }

    #[test]
    fn test_restriction_toggle_is_officer_gated() {
        let mut ledger = make_ledger();
        let officer = AccountId::new("officer");
        ledger.set_compliance_officer(&deployer(), officer.clone()).unwrap();

        // Deployer remains admin but is no longer the officer.
        let result = ledger.set_transfer_restriction(&deployer(), true);
        assert_eq!(result.unwrap_err(), LedgerError::NotAuthorized);

        ledger.set_transfer_restriction(&officer, true).unwrap();
        assert!(ledger.is_transfer_restricted());
    }
}
