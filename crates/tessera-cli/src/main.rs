//! # tessera CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::path::PathBuf;

use clap::Parser;

/// Tessera parcel ledger — fractional ownership toolchain.
///
/// Registers parcels, mints and moves fractional ownership tokens,
/// manages regulatory time-locks and the compliance allow-list, and
/// administers ledger roles against a JSON snapshot file.
#[derive(Parser, Debug)]
#[command(name = "tessera", version, about)]
struct Cli {
    /// Path to the ledger snapshot file.
    #[arg(long, default_value = "ledger.json")]
    ledger: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Create a fresh ledger snapshot.
    Init(tessera_cli::snapshot::InitArgs),
    /// Register parcels and show their legal metadata.
    Parcel(tessera_cli::parcel::ParcelArgs),
    /// Mint, transfer, and burn parcel tokens.
    Token(tessera_cli::token::TokenArgs),
    /// Time-lock management and the compliance allow-list.
    Hold(tessera_cli::hold::HoldArgs),
    /// Role handover, pause switch, restriction toggle.
    Admin(tessera_cli::admin::AdminArgs),
    /// Balances, locked amounts, and total supply.
    Query(tessera_cli::query::QueryArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => tessera_cli::snapshot::init(args, &cli.ledger),
        Commands::Parcel(args) => tessera_cli::parcel::run(args, &cli.ledger),
        Commands::Token(args) => tessera_cli::token::run(args, &cli.ledger),
        Commands::Hold(args) => tessera_cli::hold::run(args, &cli.ledger),
        Commands::Admin(args) => tessera_cli::admin::run(args, &cli.ledger),
        Commands::Query(args) => tessera_cli::query::run(args, &cli.ledger),
    }
}
