//! # Snapshot Persistence
//!
//! Loads and stores the ledger as a pretty-printed JSON file. The store
//! path writes to a sibling temp file first and renames it into place,
//! so a crash mid-write never corrupts the previous snapshot.

use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::Args;

use tessera_core::AccountId;
use tessera_ledger::{Ledger, MAX_SUPPLY};

use crate::rejection;

/// Arguments for `tessera init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Principal that receives both the admin and compliance-officer roles.
    pub deployer: String,
}

/// Create a fresh ledger snapshot at `path`.
///
/// Refuses to overwrite an existing snapshot.
pub fn init(args: InitArgs, path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("snapshot already exists at {}", path.display());
    }
    let ledger = Ledger::new(AccountId::new(args.deployer)).map_err(rejection)?;
    store(path, &ledger)?;
    tracing::info!(path = %path.display(), deployer = %ledger.admin(), "ledger initialized");
    Ok(())
}

/// Load the ledger snapshot from `path`.
///
/// A snapshot that parses but violates the ledger invariants — recorded
/// supply above the cap, or a supply scalar that does not match the sum
/// of balances — is rejected as tampered rather than handed to
/// operations that trust those invariants.
pub fn load(path: &Path) -> anyhow::Result<Ledger> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    let ledger: Ledger = serde_json::from_str(&raw)
        .with_context(|| format!("parsing snapshot {}", path.display()))?;
    if ledger.total_supply() > MAX_SUPPLY {
        anyhow::bail!(
            "snapshot {} is corrupt: total supply {} exceeds the cap {}",
            path.display(),
            ledger.total_supply(),
            MAX_SUPPLY
        );
    }
    if !ledger.check_supply_conservation() {
        anyhow::bail!(
            "snapshot {} is corrupt: total supply does not match the sum of balances",
            path.display()
        );
    }
    Ok(ledger)
}

/// Write the ledger snapshot to `path`, replacing any previous file.
pub fn store(path: &Path, ledger: &Ledger) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(ledger).context("serializing snapshot")?;
    // Temp name is the full file name plus ".tmp", so distinct snapshot
    // paths can never share a temp file.
    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp = std::path::PathBuf::from(tmp_name);
    fs::write(&tmp, json).with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("replacing snapshot {}", path.display()))?;
    Ok(())
}

/// Load, apply one mutating operation, and store only on success.
pub fn with_ledger(
    path: &Path,
    mutate: impl FnOnce(&mut Ledger) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    let mut ledger = load(path)?;
    mutate(&mut ledger)?;
    store(path, &ledger)
}
