//! # `tessera parcel` — Registry Operations
//!
//! Registers parcels with their legal metadata and shows what the
//! registry holds for a parcel.

use std::path::Path;

use clap::{Args, Subcommand};

use tessera_core::{AccountId, ParcelId};

use crate::rejection;
use crate::snapshot;

/// Arguments for `tessera parcel`.
#[derive(Args, Debug)]
pub struct ParcelArgs {
    #[command(subcommand)]
    pub command: ParcelCommand,
}

#[derive(Subcommand, Debug)]
pub enum ParcelCommand {
    /// Register a parcel with its legal metadata (admin only, write-once).
    Register {
        /// Caller principal (must hold the admin role).
        #[arg(long)]
        caller: String,
        /// Parcel identifier.
        parcel: u64,
        /// Legal identifier in the land registry of record.
        legal_id: String,
        /// Jurisdiction the parcel is registered under.
        jurisdiction: String,
    },
    /// Show the registry record for a parcel.
    Show {
        /// Parcel identifier.
        parcel: u64,
    },
}

pub fn run(args: ParcelArgs, path: &Path) -> anyhow::Result<()> {
    match args.command {
        ParcelCommand::Register { caller, parcel, legal_id, jurisdiction } => {
            snapshot::with_ledger(path, |ledger| {
                ledger
                    .register_parcel(
                        &AccountId::new(caller),
                        ParcelId(parcel),
                        legal_id,
                        jurisdiction,
                    )
                    .map_err(rejection)
            })?;
            tracing::info!(parcel, "parcel registered");
            Ok(())
        }
        ParcelCommand::Show { parcel } => {
            let ledger = snapshot::load(path)?;
            let record = ledger.parcel_metadata(ParcelId(parcel));
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
    }
}
