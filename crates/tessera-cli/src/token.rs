//! # `tessera token` — Balance Operations
//!
//! Minting, transferring, and burning parcel tokens.

use std::path::Path;

use clap::{Args, Subcommand};

use tessera_core::{AccountId, ParcelId};

use crate::rejection;
use crate::snapshot;

/// Arguments for `tessera token`.
#[derive(Args, Debug)]
pub struct TokenArgs {
    #[command(subcommand)]
    pub command: TokenCommand,
}

#[derive(Subcommand, Debug)]
pub enum TokenCommand {
    /// Mint new tokens to a recipient (admin only, supply-capped).
    Mint {
        /// Caller principal (must hold the admin role).
        #[arg(long)]
        caller: String,
        /// Recipient principal.
        recipient: String,
        /// Parcel identifier.
        parcel: u64,
        /// Amount in base units.
        amount: u64,
    },
    /// Move tokens from the caller to a recipient.
    Transfer {
        /// Caller principal (the sender).
        #[arg(long)]
        caller: String,
        /// Recipient principal.
        recipient: String,
        /// Parcel identifier.
        parcel: u64,
        /// Amount in base units.
        amount: u64,
    },
    /// Burn tokens from the caller's free balance.
    Burn {
        /// Caller principal (the holder).
        #[arg(long)]
        caller: String,
        /// Parcel identifier.
        parcel: u64,
        /// Amount in base units.
        amount: u64,
    },
}

pub fn run(args: TokenArgs, path: &Path) -> anyhow::Result<()> {
    match args.command {
        TokenCommand::Mint { caller, recipient, parcel, amount } => {
            snapshot::with_ledger(path, |ledger| {
                ledger
                    .mint(
                        &AccountId::new(caller),
                        &AccountId::new(recipient.clone()),
                        ParcelId(parcel),
                        amount,
                    )
                    .map_err(rejection)
            })?;
            tracing::info!(recipient = %recipient, parcel, amount, "tokens minted");
            Ok(())
        }
        TokenCommand::Transfer { caller, recipient, parcel, amount } => {
            snapshot::with_ledger(path, |ledger| {
                ledger
                    .transfer(
                        &AccountId::new(caller.clone()),
                        &AccountId::new(recipient.clone()),
                        ParcelId(parcel),
                        amount,
                    )
                    .map_err(rejection)
            })?;
            tracing::info!(from = %caller, to = %recipient, parcel, amount, "tokens transferred");
            Ok(())
        }
        TokenCommand::Burn { caller, parcel, amount } => {
            snapshot::with_ledger(path, |ledger| {
                ledger
                    .burn(&AccountId::new(caller.clone()), ParcelId(parcel), amount)
                    .map_err(rejection)
            })?;
            tracing::info!(holder = %caller, parcel, amount, "tokens burned");
            Ok(())
        }
    }
}
