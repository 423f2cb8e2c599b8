//! # `tessera query` — Read-Only Queries
//!
//! Pure reads against the snapshot: balances, locked amounts, total
//! supply, and the compliance gate. Collaborator systems (governance
//! weight, rent distribution, dispute standing) consume exactly these.

use std::path::Path;

use clap::{Args, Subcommand};

use tessera_core::{AccountId, ParcelId};

use crate::snapshot;

/// Arguments for `tessera query`.
#[derive(Args, Debug)]
pub struct QueryArgs {
    #[command(subcommand)]
    pub command: QueryCommand,
}

#[derive(Subcommand, Debug)]
pub enum QueryCommand {
    /// Free balance for an (account, parcel) slot.
    Balance {
        /// Account principal.
        account: String,
        /// Parcel identifier.
        parcel: u64,
    },
    /// Locked amount for an (account, parcel) slot.
    Locked {
        /// Account principal.
        account: String,
        /// Parcel identifier.
        parcel: u64,
    },
    /// Total supply across all parcels.
    Supply,
    /// Compliance gate status for an account.
    Transferee {
        /// Account principal.
        account: String,
    },
}

pub fn run(args: QueryArgs, path: &Path) -> anyhow::Result<()> {
    let ledger = snapshot::load(path)?;
    match args.command {
        QueryCommand::Balance { account, parcel } => {
            println!(
                "{}",
                ledger.balance_of(&AccountId::new(account), ParcelId(parcel))
            );
        }
        QueryCommand::Locked { account, parcel } => {
            println!(
                "{}",
                ledger.locked_balance(&AccountId::new(account), ParcelId(parcel))
            );
        }
        QueryCommand::Supply => {
            println!("{}", ledger.total_supply());
        }
        QueryCommand::Transferee { account } => {
            let approved = ledger.is_approved_transferee(&AccountId::new(account));
            let restricted = ledger.is_transfer_restricted();
            println!("approved={approved} restriction_enabled={restricted}");
        }
    }
    Ok(())
}
