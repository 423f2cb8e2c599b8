//! # tessera-core — Foundational Types for the Tessera Parcel Ledger
//!
//! This crate defines the primitives every other crate in the workspace
//! builds on: identifier newtypes, block heights, and the ledger error
//! taxonomy. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `AccountId`, `ParcelId`,
//!    `BlockHeight` — no bare strings or integers for identifiers. You
//!    cannot pass a parcel where an account is expected.
//!
//! 2. **One reserved burn sentinel.** `AccountId::burn()` is the single
//!    null/burn identity; every operation that credits a recipient rejects
//!    it with [`LedgerError::ZeroAddress`].
//!
//! 3. **Stable error codes.** Every [`LedgerError`] variant maps to a fixed
//!    numeric code via [`LedgerError::code()`]. The three lock-failure
//!    variants are distinct for diagnostics but share the legacy code 104.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tessera-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod height;
pub mod identity;

// Re-export primary types for ergonomic imports.
pub use error::LedgerError;
pub use height::BlockHeight;
pub use identity::{AccountId, ParcelId};
