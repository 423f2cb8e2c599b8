//! # tessera-cli — Parcel Ledger Command-Line Interface
//!
//! Operator tooling for a Tessera ledger instance persisted as a JSON
//! snapshot file. Every invocation is one serialized ledger operation:
//! load the snapshot, apply the operation, and write the snapshot back
//! only if the operation succeeded — a rejected operation leaves the
//! file untouched.
//!
//! ## Subcommands
//!
//! - `init` — Create a fresh ledger snapshot
//! - `parcel` — Register parcels and show their legal metadata
//! - `token` — Mint, transfer, and burn parcel tokens
//! - `hold` — Time-lock management and the compliance allow-list
//! - `admin` — Role handover, pause switch, restriction toggle
//! - `query` — Balances, locked amounts, and total supply
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `tessera-ledger` — no ledger rules here.
//! - Rejections surface the stable numeric code alongside the message.

pub mod admin;
pub mod hold;
pub mod parcel;
pub mod query;
pub mod snapshot;
pub mod token;

use tessera_core::LedgerError;

/// Wrap a ledger rejection with its stable numeric code for display.
pub(crate) fn rejection(err: LedgerError) -> anyhow::Error {
    anyhow::anyhow!("rejected [{}]: {}", err.code(), err)
}
