//! # Canon Subcommand
//!
//! Prints the canonical form of a JSON document, or with `--digest` the
//! SHA3-256 hex of the canonical form. Useful for checking what exactly
//! gets signed, and for diffing documents across SDKs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use covenant_core::{sha3_256_hex, CanonicalJson};

/// Arguments for the `covenant canon` subcommand.
#[derive(Args, Debug)]
pub struct CanonArgs {
    /// Path to the JSON document.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the SHA3-256 hex digest of the canonical form instead.
    #[arg(long)]
    pub digest: bool,
}

/// Execute the canon subcommand.
pub fn run_canon(args: &CanonArgs) -> Result<u8> {
    cmd_canon(&args.file, args.digest)
}

/// Canonicalize a JSON document and print the result.
fn cmd_canon(file_path: &Path, digest: bool) -> Result<u8> {
    let value = crate::read_document(file_path)?;
    let canonical = CanonicalJson::new(&value).context("failed to canonicalize document")?;

    if digest {
        println!("{}", sha3_256_hex(canonical.as_bytes()));
    } else {
        println!("{canonical}");
    }

    Ok(0)
}
