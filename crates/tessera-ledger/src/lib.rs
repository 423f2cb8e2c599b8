//! # tessera-ledger — Fractional Parcel Ownership Ledger
//!
//! Models fractional ownership of registered land parcels as a fungible
//! balance ledger with three orthogonal control layers: role-gated
//! administration, per-owner time-locks for regulatory holds, and a
//! compliance allow-list gating transfers.
//!
//! ## Components
//!
//! - **Access control** (`access.rs`): administrator and compliance-officer
//!   roles, the pause switch, and the transfer-restriction toggle.
//!
//! - **Parcel registry** (`registry.rs`): write-once legal metadata per
//!   parcel; every balance operation is gated on registration.
//!
//! - **Balance ledger** (`balance.rs`): supply-capped minting, balance-
//!   bounded burning and transfer, and the running total-supply scalar.
//!
//! - **Lock manager** (`lock.rs`): at most one time-lock per (owner,
//!   parcel) slot, plus the approved-transferee allow-list.
//!
//! ## Execution Model
//!
//! Every operation is a synchronous method on [`Ledger`] that validates
//! all of its preconditions before mutating anything: the first violated
//! precondition returns its [`LedgerError`](tessera_core::LedgerError)
//! and leaves the ledger untouched. Callers in a concurrent environment
//! must serialize operations themselves (one mutex-guarded critical
//! section or one database transaction per call) — the ledger performs
//! no interior locking. The one "lock" in the domain is a time-hold on
//! tokens, unrelated to concurrency control.
//!
//! ## Invariants
//!
//! After every successful operation:
//!
//! 1. Total supply equals the sum of all free and locked balances.
//! 2. No balance or locked amount is ever negative; underflow attempts
//!    fail instead of wrapping.
//! 3. Balance and lock mutations require a registered parcel.
//! 4. At most one lock record exists per (owner, parcel).
//! 5. Total supply never exceeds [`MAX_SUPPLY`](ledger::MAX_SUPPLY).

pub mod access;
pub mod balance;
pub mod ledger;
pub mod lock;
pub mod registry;

// ─── Ledger re-exports ──────────────────────────────────────────────

pub use ledger::{Ledger, LedgerConfig, MAX_SUPPLY};

// ─── Record re-exports ──────────────────────────────────────────────

pub use lock::LockRecord;
pub use registry::ParcelRecord;
