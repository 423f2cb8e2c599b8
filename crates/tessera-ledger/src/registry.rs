//! # Parcel Registry
//!
//! Write-once legal metadata per parcel. Registration is a one-way
//! transition from "absent" to "registered": there is no update or
//! delete path, so recorded legal identifiers can never drift from
//! what the registering authority attested.
//!
//! Registry data is supplied by an off-ledger oracle and treated as
//! already validated at the point of registration — the ledger performs
//! no independent verification of legal identifiers or jurisdictions.

use serde::{Deserialize, Serialize};

use tessera_core::{AccountId, LedgerError, ParcelId};

use crate::ledger::Ledger;

/// Legal metadata for one parcel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParcelRecord {
    /// Legal identifier in the land registry of record (e.g. a deed number).
    pub legal_id: String,
    /// Jurisdiction the parcel is registered under.
    pub jurisdiction: String,
    /// Whether the parcel is registered. `false` only in the default
    /// record returned for parcels that were never registered.
    pub registered: bool,
}

impl Ledger {
    /// Register a parcel with its legal metadata. Admin only.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::NotAuthorized`] if `caller` is not the admin.
    /// - [`LedgerError::InvalidParcel`] if the parcel is already
    ///   registered — metadata is write-once.
    pub fn register_parcel(
        &mut self,
        caller: &AccountId,
        parcel: ParcelId,
        legal_id: impl Into<String>,
        jurisdiction: impl Into<String>,
    ) -> Result<(), LedgerError> {
        self.require_admin(caller)?;
        if self.parcels.contains_key(&parcel) {
            return Err(LedgerError::InvalidParcel(parcel));
        }
        self.parcels.insert(
            parcel,
            ParcelRecord {
                legal_id: legal_id.into(),
                jurisdiction: jurisdiction.into(),
                registered: true,
            },
        );
        Ok(())
    }

    /// Metadata for a parcel; a default unregistered record if absent.
    ///
    /// Never fails — collaborators use this for standing determination
    /// without having to distinguish "absent" from "unregistered".
    pub fn parcel_metadata(&self, parcel: ParcelId) -> ParcelRecord {
        self.parcels.get(&parcel).cloned().unwrap_or_default()
    }

    /// Require `parcel` to be registered.
    pub(crate) fn assert_registered(&self, parcel: ParcelId) -> Result<(), LedgerError> {
        match self.parcels.get(&parcel) {
            Some(record) if record.registered => Ok(()),
            _ => Err(LedgerError::InvalidParcel(parcel)),
        }
    }
}
