//! # `tessera hold` — Time-Locks and the Compliance Allow-List
//!
//! Lock and unlock regulatory holds, and manage the set of identities
//! permitted to receive tokens while transfer restriction is enabled.

use std::path::Path;

use clap::{Args, Subcommand};

use tessera_core::{AccountId, BlockHeight, ParcelId};

use crate::rejection;
use crate::snapshot;

/// Arguments for `tessera hold`.
#[derive(Args, Debug)]
pub struct HoldArgs {
    #[command(subcommand)]
    pub command: HoldCommand,
}

#[derive(Subcommand, Debug)]
pub enum HoldCommand {
    /// Hold part of the caller's free balance until a target height.
    Lock {
        /// Caller principal (the holder).
        #[arg(long)]
        caller: String,
        /// Parcel identifier.
        parcel: u64,
        /// Amount to hold, in base units.
        amount: u64,
        /// Height at which the hold matures.
        unlock_height: u64,
    },
    /// Release a matured hold back into the caller's free balance.
    Unlock {
        /// Caller principal (the holder).
        #[arg(long)]
        caller: String,
        /// Parcel identifier.
        parcel: u64,
        /// Current chain height the operation runs at.
        height: u64,
    },
    /// Add an identity to the compliance allow-list (officer only).
    Approve {
        /// Caller principal (must hold the compliance-officer role).
        #[arg(long)]
        caller: String,
        /// Identity to approve as a transferee.
        transferee: String,
    },
    /// Remove an identity from the compliance allow-list (officer only).
    Revoke {
        /// Caller principal (must hold the compliance-officer role).
        #[arg(long)]
        caller: String,
        /// Identity to remove from the allow-list.
        transferee: String,
    },
}

pub fn run(args: HoldArgs, path: &Path) -> anyhow::Result<()> {
    match args.command {
        HoldCommand::Lock { caller, parcel, amount, unlock_height } => {
            snapshot::with_ledger(path, |ledger| {
                ledger
                    .lock_tokens(
                        &AccountId::new(caller.clone()),
                        ParcelId(parcel),
                        amount,
                        BlockHeight(unlock_height),
                    )
                    .map_err(rejection)
            })?;
            tracing::info!(holder = %caller, parcel, amount, unlock_height, "tokens locked");
            Ok(())
        }
        HoldCommand::Unlock { caller, parcel, height } => {
            snapshot::with_ledger(path, |ledger| {
                ledger
                    .unlock_tokens(
                        &AccountId::new(caller.clone()),
                        ParcelId(parcel),
                        BlockHeight(height),
                    )
                    .map_err(rejection)
            })?;
            tracing::info!(holder = %caller, parcel, height, "tokens unlocked");
            Ok(())
        }
        HoldCommand::Approve { caller, transferee } => {
            snapshot::with_ledger(path, |ledger| {
                ledger
                    .approve_transferee(
                        &AccountId::new(caller),
                        AccountId::new(transferee.clone()),
                    )
                    .map_err(rejection)
            })?;
            tracing::info!(transferee = %transferee, "transferee approved");
            Ok(())
        }
        HoldCommand::Revoke { caller, transferee } => {
            snapshot::with_ledger(path, |ledger| {
                ledger
                    .revoke_transferee(
                        &AccountId::new(caller),
                        &AccountId::new(transferee.clone()),
                    )
                    .map_err(rejection)
            })?;
            tracing::info!(transferee = %transferee, "transferee revoked");
            Ok(())
        }
    }
}
