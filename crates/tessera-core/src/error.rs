//! # Error Taxonomy — One Variant per Rejected Precondition
//!
//! Every ledger operation validates all of its preconditions before
//! touching state; the first violated precondition aborts the operation
//! with one of these variants and no state changes occur. Errors are
//! ordinary result values recovered at the caller boundary — never used
//! for control flow across operations, never retried automatically.
//!
//! ## Design
//!
//! The legacy ledger reused a single `LockedTokens` code for three
//! distinct conditions: a lock blocking a burn/transfer, unlocking with
//! no lock present, and unlocking before maturity. These are split here
//! into [`LedgerError::LockPresent`], [`LedgerError::NoActiveLock`], and
//! [`LedgerError::LockNotMatured`] for diagnostics, while [`code()`]
//! still reports the shared legacy code 104 for all three.
//!
//! [`code()`]: LedgerError::code

use thiserror::Error;

use crate::height::BlockHeight;
use crate::identity::{AccountId, ParcelId};

/// Rejection reasons for ledger operations, with stable numeric codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Caller does not hold the role the operation requires.
    #[error("caller is not authorized for this operation")]
    NotAuthorized,

    /// Free balance is smaller than the requested amount.
    #[error("insufficient balance: have {available}, need {requested}")]
    InsufficientBalance {
        /// Free balance available to the caller.
        available: u64,
        /// Amount the operation asked for.
        requested: u64,
    },

    /// A lock already exists for this (owner, parcel) slot.
    #[error("a lock already exists for this owner and parcel")]
    AlreadyLocked,

    /// Minting would push total supply past the hard cap.
    #[error("mint of {requested} exceeds remaining supply headroom {headroom}")]
    MaxSupplyReached {
        /// Units still mintable before the cap.
        headroom: u64,
        /// Amount the mint asked for.
        requested: u64,
    },

    /// An active lock blocks this burn or transfer.
    #[error("tokens are locked for this owner and parcel")]
    LockPresent,

    /// No lock exists to unlock.
    #[error("no active lock for this owner and parcel")]
    NoActiveLock,

    /// The lock exists but its maturity height has not been reached.
    #[error("lock matures at {unlock_height}, current height is {current}")]
    LockNotMatured {
        /// Height at which the lock becomes unlockable.
        unlock_height: BlockHeight,
        /// Height the operation ran at.
        current: BlockHeight,
    },

    /// The ledger is paused; state-moving operations are suspended.
    #[error("ledger is paused")]
    Paused,

    /// The burn/null identity was supplied where a recipient is required.
    #[error("the burn identity cannot receive tokens or hold a role")]
    ZeroAddress,

    /// The parcel is unregistered, or registration was attempted twice.
    #[error("parcel {0} is not registered or already exists")]
    InvalidParcel(ParcelId),

    /// Transfer restriction is enabled and the recipient is not approved.
    #[error("recipient {0} is not an approved transferee")]
    TransferRestricted(AccountId),
}

impl LedgerError {
    /// The stable numeric code for this rejection.
    ///
    /// Codes are wire-stable across releases. The three lock-failure
    /// variants intentionally share code 104, matching the legacy
    /// single-code behavior.
    pub fn code(&self) -> u32 {
        match self {
            Self::NotAuthorized => 100,
            Self::InsufficientBalance { .. } => 101,
            Self::AlreadyLocked => 102,
            Self::MaxSupplyReached { .. } => 103,
            Self::LockPresent | Self::NoActiveLock | Self::LockNotMatured { .. } => 104,
            Self::Paused => 105,
            Self::ZeroAddress => 106,
            Self::InvalidParcel(_) => 107,
            Self::TransferRestricted(_) => 108,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_variants_share_legacy_code() {
        assert_eq!(LedgerError::LockPresent.code(), 104);
        assert_eq!(LedgerError::NoActiveLock.code(), 104);
        assert_eq!(
            LedgerError::LockNotMatured {
                unlock_height: BlockHeight(100),
                current: BlockHeight(99),
            }
            .code(),
            104
        );
    }

    #[test]
    fn test_codes_are_distinct_outside_the_lock_family() {
        let errs = [
            LedgerError::NotAuthorized,
            LedgerError::InsufficientBalance { available: 0, requested: 1 },
            LedgerError::AlreadyLocked,
            LedgerError::MaxSupplyReached { headroom: 0, requested: 1 },
            LedgerError::LockPresent,
            LedgerError::Paused,
            LedgerError::ZeroAddress,
            LedgerError::InvalidParcel(ParcelId(1)),
            LedgerError::TransferRestricted(AccountId::new("x")),
        ];
        let mut codes: Vec<u32> = errs.iter().map(LedgerError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errs.len());
    }

    #[test]
    fn test_display_carries_context() {
        let err = LedgerError::InsufficientBalance { available: 3, requested: 10 };
        assert_eq!(err.to_string(), "insufficient balance: have 3, need 10");

        let err = LedgerError::LockNotMatured {
            unlock_height: BlockHeight(100),
            current: BlockHeight(42),
        };
        assert!(err.to_string().contains("height:100"));
        assert!(err.to_string().contains("height:42"));
    }
}
