//! # covenant CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing; verbosity flags map onto
//! a tracing-subscriber environment filter.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use covenant_cli::canon::{run_canon, CanonArgs};
use covenant_cli::keygen::{run_keygen, KeygenArgs};
use covenant_cli::sign::{run_sign, SignArgs};
use covenant_cli::verify::{run_verify, VerifyArgs};

/// Covenant attestation toolchain.
///
/// Canonical JSON rendering, secp256k1 key generation, and ECDSA document
/// signing and verification, interoperable with the platform's other SDKs.
#[derive(Parser, Debug)]
#[command(name = "covenant", version = "0.1.0", about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a secp256k1 keypair as PEM files.
    Keygen(KeygenArgs),

    /// Print the canonical form (or its digest) of a JSON document.
    Canon(CanonArgs),

    /// Sign a JSON document, producing a signed envelope.
    Sign(SignArgs),

    /// Verify the signature on a signed envelope.
    Verify(VerifyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!("covenant CLI v0.1.0 starting");

    let result = match cli.command {
        Commands::Keygen(args) => run_keygen(&args),
        Commands::Canon(args) => run_canon(&args),
        Commands::Sign(args) => run_sign(&args),
        Commands::Verify(args) => run_verify(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
