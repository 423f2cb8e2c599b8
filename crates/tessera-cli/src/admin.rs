//! # `tessera admin` — Role and Switch Administration
//!
//! Role handover, compliance-officer appointment, the pause switch,
//! and the transfer-restriction toggle.

use std::path::Path;

use clap::{Args, Subcommand};

use tessera_core::AccountId;

use crate::rejection;
use crate::snapshot;

/// Arguments for `tessera admin`.
#[derive(Args, Debug)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// Hand the administrator role to another principal.
    TransferAdmin {
        /// Caller principal (must hold the admin role).
        #[arg(long)]
        caller: String,
        /// Principal receiving the admin role.
        new_admin: String,
    },
    /// Appoint the compliance officer (admin only).
    SetOfficer {
        /// Caller principal (must hold the admin role).
        #[arg(long)]
        caller: String,
        /// Principal receiving the compliance-officer role.
        officer: String,
    },
    /// Suspend burns, transfers, locks, and unlocks (admin only).
    Pause {
        /// Caller principal (must hold the admin role).
        #[arg(long)]
        caller: String,
    },
    /// Lift the pause (admin only).
    Unpause {
        /// Caller principal (must hold the admin role).
        #[arg(long)]
        caller: String,
    },
    /// Require recipients to be approved transferees (officer only).
    Restrict {
        /// Caller principal (must hold the compliance-officer role).
        #[arg(long)]
        caller: String,
    },
    /// Lift the transfer restriction (officer only).
    Unrestrict {
        /// Caller principal (must hold the compliance-officer role).
        #[arg(long)]
        caller: String,
    },
}

pub fn run(args: AdminArgs, path: &Path) -> anyhow::Result<()> {
    match args.command {
        AdminCommand::TransferAdmin { caller, new_admin } => {
            snapshot::with_ledger(path, |ledger| {
                ledger
                    .transfer_admin(&AccountId::new(caller), AccountId::new(new_admin.clone()))
                    .map_err(rejection)
            })?;
            tracing::info!(new_admin = %new_admin, "admin role handed over");
            Ok(())
        }
        AdminCommand::SetOfficer { caller, officer } => {
            snapshot::with_ledger(path, |ledger| {
                ledger
                    .set_compliance_officer(
                        &AccountId::new(caller),
                        AccountId::new(officer.clone()),
                    )
                    .map_err(rejection)
            })?;
            tracing::info!(officer = %officer, "compliance officer appointed");
            Ok(())
        }
        AdminCommand::Pause { caller } => {
            snapshot::with_ledger(path, |ledger| {
                ledger.set_paused(&AccountId::new(caller), true).map_err(rejection)
            })?;
            tracing::info!("ledger paused");
            Ok(())
        }
        AdminCommand::Unpause { caller } => {
            snapshot::with_ledger(path, |ledger| {
                ledger.set_paused(&AccountId::new(caller), false).map_err(rejection)
            })?;
            tracing::info!("ledger unpaused");
            Ok(())
        }
        AdminCommand::Restrict { caller } => {
            snapshot::with_ledger(path, |ledger| {
                ledger
                    .set_transfer_restriction(&AccountId::new(caller), true)
                    .map_err(rejection)
            })?;
            tracing::info!("transfer restriction enabled");
            Ok(())
        }
        AdminCommand::Unrestrict { caller } => {
            snapshot::with_ledger(path, |ledger| {
                ledger
                    .set_transfer_restriction(&AccountId::new(caller), false)
                    .map_err(rejection)
            })?;
            tracing::info!("transfer restriction disabled");
            Ok(())
        }
    }
}
