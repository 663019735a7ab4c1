//! # End-to-End CLI Pipeline Tests
//!
//! Drives the subcommand entry points the way a shell session would:
//! generate a keypair, sign a document, verify the envelope, all through
//! files in a temporary directory. Exit codes follow the protocol split
//! between a failed check (exit 1 via `Ok(1)`) and a failed run (`Err`).

use std::path::Path;

use covenant_cli::keygen::{run_keygen, KeygenArgs};
use covenant_cli::sign::{run_sign, SignArgs};
use covenant_cli::verify::{run_verify, VerifyArgs};

fn keygen(dir: &Path, prefix: &str) {
    let code = run_keygen(&KeygenArgs {
        output: dir.to_path_buf(),
        prefix: prefix.to_string(),
    })
    .unwrap();
    assert_eq!(code, 0);
}

#[test]
fn test_keygen_sign_verify_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    keygen(dir.path(), "alice");

    let doc_path = dir.path().join("contract.json");
    std::fs::write(
        &doc_path,
        r#"{"parties": ["alice", "bob"], "currency": "EUR", "amount": 1500.5}"#,
    )
    .unwrap();

    let signed_path = dir.path().join("signed.json");
    let code = run_sign(&SignArgs {
        key: dir.path().join("alice.pem"),
        file: doc_path,
        output: Some(signed_path.clone()),
    })
    .unwrap();
    assert_eq!(code, 0);

    let code = run_verify(&VerifyArgs {
        pubkey: dir.path().join("alice.pub.pem"),
        file: signed_path,
    })
    .unwrap();
    assert_eq!(code, 0);
}

#[test]
fn test_tampered_document_fails_verification() {
    let dir = tempfile::tempdir().unwrap();
    keygen(dir.path(), "alice");

    let doc_path = dir.path().join("contract.json");
    std::fs::write(&doc_path, r#"{"amount": 100}"#).unwrap();

    let signed_path = dir.path().join("signed.json");
    run_sign(&SignArgs {
        key: dir.path().join("alice.pem"),
        file: doc_path,
        output: Some(signed_path.clone()),
    })
    .unwrap();

    // Raise the amount inside the signed envelope.
    let content = std::fs::read_to_string(&signed_path).unwrap();
    std::fs::write(&signed_path, content.replace("100", "100000")).unwrap();

    let code = run_verify(&VerifyArgs {
        pubkey: dir.path().join("alice.pub.pem"),
        file: signed_path,
    })
    .unwrap();
    assert_eq!(code, 1);
}

#[test]
fn test_envelope_from_one_key_rejected_by_another() {
    let dir = tempfile::tempdir().unwrap();
    keygen(dir.path(), "alice");
    keygen(dir.path(), "mallory");

    let doc_path = dir.path().join("contract.json");
    std::fs::write(&doc_path, r#"{"amount": 100}"#).unwrap();

    let signed_path = dir.path().join("signed.json");
    run_sign(&SignArgs {
        key: dir.path().join("mallory.pem"),
        file: doc_path,
        output: Some(signed_path.clone()),
    })
    .unwrap();

    let code = run_verify(&VerifyArgs {
        pubkey: dir.path().join("alice.pub.pem"),
        file: signed_path,
    })
    .unwrap();
    assert_eq!(code, 1);
}
