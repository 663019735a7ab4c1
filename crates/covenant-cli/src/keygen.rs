//! # Keygen Subcommand
//!
//! Generates a secp256k1 keypair and writes it out as two PEM files, the
//! same shapes the key codec decodes: `<prefix>.pem` holds the SEC1
//! "EC PRIVATE KEY" and `<prefix>.pub.pem` the SubjectPublicKeyInfo
//! "PUBLIC KEY".

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use covenant_crypto::generate_keypair;

/// Arguments for the `covenant keygen` subcommand.
#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Output directory for the keypair files.
    #[arg(long, short, default_value = ".")]
    pub output: PathBuf,

    /// Prefix for the key filenames.
    #[arg(long, default_value = "covenant")]
    pub prefix: String,
}

/// Execute the keygen subcommand.
pub fn run_keygen(args: &KeygenArgs) -> Result<u8> {
    cmd_keygen(&args.output, &args.prefix)
}

/// Generate a new secp256k1 keypair and write to files.
fn cmd_keygen(output_dir: &Path, prefix: &str) -> Result<u8> {
    std::fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    let (private_key, public_key) =
        generate_keypair().context("failed to generate secp256k1 keypair")?;

    let private_path = output_dir.join(format!("{prefix}.pem"));
    let public_path = output_dir.join(format!("{prefix}.pub.pem"));

    std::fs::write(&private_path, private_key.pem())
        .with_context(|| format!("failed to write private key: {}", private_path.display()))?;
    std::fs::write(&public_path, public_key.pem())
        .with_context(|| format!("failed to write public key: {}", public_path.display()))?;

    println!("OK: generated secp256k1 keypair");
    println!("  Private key: {}", private_path.display());
    println!("  Public key:  {}", public_path.display());

    Ok(0)
}
