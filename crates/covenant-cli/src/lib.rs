//! # covenant-cli — CLI Tool for the Covenant Attestation Stack
//!
//! Provides the `covenant` command-line interface over the `covenant-core`
//! and `covenant-crypto` libraries.
//!
//! ## Subcommands
//!
//! - `covenant keygen` — secp256k1 keypair generation as PEM files.
//! - `covenant canon` — Canonical form (or SHA3-256 digest) of a JSON document.
//! - `covenant sign` — Sign a JSON document, producing a signed envelope.
//! - `covenant verify` — Check the signature on a signed envelope.
//!
//! Keys and envelopes are interchangeable with the platform's other SDKs:
//! canonicalization is byte-stable, signing is deterministic (RFC 6979), and
//! key files use the standard OpenSSL PEM shapes.
//!
//! ```bash
//! covenant keygen --output keys --prefix alice
//! covenant canon contract.json --digest
//! covenant sign --key keys/alice.pem contract.json --output signed.json
//! covenant verify --pubkey keys/alice.pub.pem signed.json
//! ```

pub mod canon;
pub mod keygen;
pub mod sign;
pub mod verify;

use std::path::Path;

use anyhow::{bail, Context, Result};

/// Read and parse a JSON document from disk.
///
/// Floats are parsed with full round-trip precision, so parse followed by
/// canonicalize is byte-stable for any document another SDK produced.
pub fn read_document(path: &Path) -> Result<serde_json::Value> {
    if !path.exists() {
        bail!("document file not found: {}", path.display());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read document: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse JSON: {}", path.display()))
}
