//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the two identifier namespaces of the parcel
//! ledger — you cannot pass a `ParcelId` where an `AccountId` is expected.
//!
//! ## Security Invariant
//!
//! Type-level distinction between identifier namespaces prevents
//! cross-namespace confusion where one kind of identifier is substituted
//! for another. The burn sentinel is a single reserved `AccountId` value,
//! not a parallel type, so membership checks stay uniform.

use serde::{Deserialize, Serialize};

/// Reserved principal representing the burn/null identity.
///
/// Tokens can never be credited to this account: every operation that
/// takes a recipient rejects it.
const BURN_ACCOUNT: &str = "burn";

/// An opaque, comparable account identity (principal-like).
///
/// The ledger attaches no structure to the inner string beyond equality
/// and ordering; identity verification happens off-ledger.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Wrap an externally supplied principal string.
    pub fn new(principal: impl Into<String>) -> Self {
        Self(principal.into())
    }

    /// The reserved burn/null identity.
    pub fn burn() -> Self {
        Self(BURN_ACCOUNT.to_string())
    }

    /// Whether this is the reserved burn/null identity.
    pub fn is_burn(&self) -> bool {
        self.0 == BURN_ACCOUNT
    }

    /// Access the inner principal string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Unique identifier for a registered land parcel.
///
/// Plain unsigned integer with no required structure; assigned by the
/// registering authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParcelId(pub u64);

impl ParcelId {
    /// Access the inner integer.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "account:{}", self.0)
    }
}

impl std::fmt::Display for ParcelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parcel:{}", self.0)
    }
}
