//! # Sign Subcommand
//!
//! Signs a JSON document with a secp256k1 private key, producing a signed
//! envelope (`{"message": ..., "sig": ...}`) on stdout or written to a
//! file. The signature covers the SHA3-256 digest of the document's
//! canonical form, so insignificant formatting differences in the input
//! file do not change the signature.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use covenant_crypto::{sign_canonical, EcdsaPrivateKey};

/// Arguments for the `covenant sign` subcommand.
#[derive(Args, Debug)]
pub struct SignArgs {
    /// Path to the private key PEM file.
    #[arg(long)]
    pub key: PathBuf,

    /// Path to the JSON document to sign.
    #[arg(value_name = "DOC")]
    pub file: PathBuf,

    /// Write the signed envelope to a file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Execute the sign subcommand.
pub fn run_sign(args: &SignArgs) -> Result<u8> {
    cmd_sign(&args.key, &args.file, args.output.as_deref())
}

/// Sign a JSON document and emit the signed envelope.
fn cmd_sign(key_path: &Path, file_path: &Path, output: Option<&Path>) -> Result<u8> {
    if !key_path.exists() {
        bail!("private key file not found: {}", key_path.display());
    }

    let pem_text = std::fs::read_to_string(key_path)
        .with_context(|| format!("failed to read private key: {}", key_path.display()))?;
    let key = EcdsaPrivateKey::from_pem(pem_text);

    let value = crate::read_document(file_path)?;
    let signed = sign_canonical(&key, value).context("failed to sign document")?;

    match output {
        Some(path) => {
            let mut encoded =
                serde_json::to_string_pretty(&signed).context("failed to encode envelope")?;
            encoded.push('\n');
            std::fs::write(path, encoded)
                .with_context(|| format!("failed to write envelope: {}", path.display()))?;
            println!("OK: wrote signed envelope to {}", path.display());
        }
        None => {
            let encoded = serde_json::to_string(&signed).context("failed to encode envelope")?;
            println!("{encoded}");
        }
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_crypto::{check_signature_canonical, generate_keypair, EcdsaPublicKey, Signed};
    use serde_json::json;

    fn write_keypair(dir: &Path) -> (PathBuf, EcdsaPublicKey) {
        let (private_key, public_key) = generate_keypair().unwrap();
        let key_path = dir.join("test.pem");
        std::fs::write(&key_path, private_key.pem()).unwrap();
        (key_path, public_key)
    }

    #[test]
    fn sign_writes_verifiable_envelope() {
        let dir = tempfile::tempdir().unwrap();
        let (key_path, public_key) = write_keypair(dir.path());

        let doc_path = dir.path().join("doc.json");
        let doc = json!({"action": "transfer", "amount": 1000});
        std::fs::write(&doc_path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();

        let out_path = dir.path().join("signed.json");
        assert_eq!(cmd_sign(&key_path, &doc_path, Some(&out_path)).unwrap(), 0);

        let content = std::fs::read_to_string(&out_path).unwrap();
        let signed: Signed<serde_json::Value> = serde_json::from_str(&content).unwrap();
        assert_eq!(signed.message(), &doc);
        assert!(check_signature_canonical(&public_key, &signed).unwrap());
    }

    #[test]
    fn sign_is_stable_across_document_formatting() {
        let dir = tempfile::tempdir().unwrap();
        let (key_path, _) = write_keypair(dir.path());

        let compact = dir.path().join("compact.json");
        std::fs::write(&compact, "{\"b\":2,\"a\":1}").unwrap();
        let spaced = dir.path().join("spaced.json");
        std::fs::write(&spaced, "{ \"a\": 1,\n  \"b\": 2 }").unwrap();

        let out_a = dir.path().join("a.json");
        let out_b = dir.path().join("b.json");
        cmd_sign(&key_path, &compact, Some(&out_a)).unwrap();
        cmd_sign(&key_path, &spaced, Some(&out_b)).unwrap();

        let sig = |p: &Path| {
            let signed: Signed<serde_json::Value> =
                serde_json::from_str(&std::fs::read_to_string(p).unwrap()).unwrap();
            signed.sig().as_base64().to_string()
        };
        assert_eq!(sig(&out_a), sig(&out_b));
    }

    #[test]
    fn sign_rejects_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let doc_path = dir.path().join("doc.json");
        std::fs::write(&doc_path, "{}").unwrap();
        assert!(cmd_sign(&dir.path().join("absent.pem"), &doc_path, None).is_err());
    }

    #[test]
    fn sign_rejects_garbage_key() {
        let dir = tempfile::tempdir().unwrap();
        let key_path = dir.path().join("bad.pem");
        std::fs::write(&key_path, "not a pem file").unwrap();
        let doc_path = dir.path().join("doc.json");
        std::fs::write(&doc_path, "{}").unwrap();
        assert!(cmd_sign(&key_path, &doc_path, None).is_err());
    }
}
