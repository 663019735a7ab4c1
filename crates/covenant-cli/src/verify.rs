//! # Verify Subcommand
//!
//! Checks the signature on a signed envelope against a public key. The
//! embedded message is re-canonicalized, so the envelope file may be
//! reformatted freely without breaking verification.
//!
//! Exit status follows the protocol distinction between a failed check and
//! a failed run: a signature that does not match prints `FAIL: ...` and
//! exits 1, while unusable inputs (missing files, bad PEM, malformed JSON)
//! are reported as errors.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use covenant_crypto::{check_signature_canonical, EcdsaPublicKey, Signed};

/// Arguments for the `covenant verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path to the public key PEM file.
    #[arg(long)]
    pub pubkey: PathBuf,

    /// Path to the signed envelope JSON.
    #[arg(value_name = "SIGNED")]
    pub file: PathBuf,
}

/// Execute the verify subcommand.
pub fn run_verify(args: &VerifyArgs) -> Result<u8> {
    cmd_verify(&args.pubkey, &args.file)
}

/// Verify a signed envelope against a public key.
fn cmd_verify(pubkey_path: &Path, file_path: &Path) -> Result<u8> {
    if !pubkey_path.exists() {
        bail!("public key file not found: {}", pubkey_path.display());
    }
    if !file_path.exists() {
        bail!("envelope file not found: {}", file_path.display());
    }

    let pem_text = std::fs::read_to_string(pubkey_path)
        .with_context(|| format!("failed to read public key: {}", pubkey_path.display()))?;
    let key = EcdsaPublicKey::from_pem(pem_text);

    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("failed to read envelope: {}", file_path.display()))?;
    let signed: Signed<serde_json::Value> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse signed envelope: {}", file_path.display()))?;

    let valid = check_signature_canonical(&key, &signed).context("failed to check signature")?;
    if valid {
        println!("OK: signature is valid");
        Ok(0)
    } else {
        println!("FAIL: signature does not match");
        Ok(1)
    }
}
