//! # pasc CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pasc_cli::catalog::{run_catalog, CatalogArgs};
use pasc_cli::contract::{run_contract, ContractArgs};
use pasc_cli::rat::{run_rat, RatArgs};

/// PASC Data Guardian — compliance certificates for personal-data processing.
///
/// Issues RAT certificates for the shared state services and legal annexes
/// for contracting parties, as PDF files.
#[derive(Parser, Debug)]
#[command(name = "pasc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output directory for generated certificates.
    #[arg(long, global = true, default_value = ".")]
    output_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Issue the RAT certificate for a catalog service.
    Rat(RatArgs),

    /// Issue a legal annex for a contracting party.
    Contract(ContractArgs),

    /// List catalog services or show one service's legal card.
    Catalog(CatalogArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so `--stdout` output stays a clean PDF.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(output_dir = %cli.output_dir.display(), "pasc starting");

    let result = match &cli.command {
        Commands::Rat(args) => run_rat(args, &cli.output_dir),
        Commands::Contract(args) => run_contract(args, &cli.output_dir),
        Commands::Catalog(args) => run_catalog(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
