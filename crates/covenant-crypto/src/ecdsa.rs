//! # secp256k1 ECDSA Operations
//!
//! Thin wrappers around `k256` fixing the curve and the calling convention
//! for the whole stack: keys come in as raw bytes from the PEM codec,
//! signatures travel as DER, and the signed payload is always a 32-byte
//! SHA3-256 prehash.
//!
//! The curve parameters are compile-time constants inside `k256`; there is
//! no runtime curve context to initialize or share.
//!
//! ## Signature Semantics
//!
//! - Signing uses deterministic RFC 6979 nonce derivation, so the same key
//!   and digest always produce the same signature.
//! - Verification accepts both low-S and high-S encodings. `k256` rejects
//!   high-S forms by default, but signatures produced by other stacks are
//!   not normalized, so the verifier normalizes before checking.
//! - Verification failure is a `false` return, never an error. Malformed
//!   signature DER is also `false`: a corrupt signature is
//!   indistinguishable from tampering.

use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::{Signature, SigningKey, VerifyingKey};

use covenant_core::MessageDigest;

use crate::error::{CurveError, SignError};

/// Construct a verifying key from an SEC1-encoded point.
///
/// # Errors
///
/// `CurveError::InvalidPoint` if the bytes are the wrong length or do not
/// lie on secp256k1.
pub fn verifying_key_from_sec1(bytes: &[u8]) -> Result<VerifyingKey, CurveError> {
    VerifyingKey::from_sec1_bytes(bytes).map_err(|e| CurveError::InvalidPoint(e.to_string()))
}

/// Construct a signing key from a raw 32-byte private scalar.
///
/// # Errors
///
/// `CurveError::InvalidScalar` if the bytes are the wrong length, zero, or
/// not below the curve order.
pub fn signing_key_from_scalar(bytes: &[u8]) -> Result<SigningKey, CurveError> {
    SigningKey::from_slice(bytes).map_err(|e| CurveError::InvalidScalar(e.to_string()))
}

/// Sign a message digest, returning the DER-encoded signature.
pub fn sign(key: &SigningKey, digest: &MessageDigest) -> Result<Vec<u8>, SignError> {
    let signature: Signature = key
        .sign_prehash(digest.as_bytes())
        .map_err(|e| SignError::Signature(e.to_string()))?;
    Ok(signature.to_der().as_bytes().to_vec())
}

/// Verify a DER-encoded signature over a message digest.
///
/// Returns `false` for a non-matching signature and for signature bytes
/// that do not parse as DER at all.
pub fn verify(key: &VerifyingKey, digest: &MessageDigest, signature_der: &[u8]) -> bool {
    let Ok(signature) = Signature::from_der(signature_der) else {
        return false;
    };
    let signature = signature.normalize_s().unwrap_or(signature);
    key.verify_prehash(digest.as_bytes(), &signature).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_core::sha3_256_digest;
    use rand_core::OsRng;

    fn test_key() -> SigningKey {
        SigningKey::random(&mut OsRng)
    }

    #[test]
    fn test_sign_and_verify_round_trip() {
        let key = test_key();
        let digest = sha3_256_digest(b"attested document");
        let der = sign(&key, &digest).unwrap();
        assert!(verify(key.verifying_key(), &digest, &der));
    }

    #[test]
    fn test_signing_is_deterministic() {
        let key = test_key();
        let digest = sha3_256_digest(b"same input");
        let a = sign(&key, &digest).unwrap();
        let b = sign(&key, &digest).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_wrong_digest_fails() {
        let key = test_key();
        let der = sign(&key, &sha3_256_digest(b"original")).unwrap();
        assert!(!verify(
            key.verifying_key(),
            &sha3_256_digest(b"tampered"),
            &der
        ));
    }

    #[test]
    fn test_wrong_key_fails() {
        let signer = test_key();
        let other = test_key();
        let digest = sha3_256_digest(b"document");
        let der = sign(&signer, &digest).unwrap();
        assert!(!verify(other.verifying_key(), &digest, &der));
    }

    #[test]
    fn test_malformed_der_is_false_not_error() {
        let key = test_key();
        let digest = sha3_256_digest(b"document");
        assert!(!verify(key.verifying_key(), &digest, b"not a signature"));
        assert!(!verify(key.verifying_key(), &digest, &[]));
    }

    #[test]
    fn test_high_s_signature_accepted() {
        let key = test_key();
        let digest = sha3_256_digest(b"document");
        let der = sign(&key, &digest).unwrap();
        let signature = Signature::from_der(&der).unwrap();

        // Flip s to the high form; the verifier must still accept it.
        let (r, s) = signature.split_scalars();
        let high_s = Signature::from_scalars(*r, -*s).unwrap();
        assert!(high_s.normalize_s().is_some(), "expected a high-S form");
        assert!(verify(
            key.verifying_key(),
            &digest,
            high_s.to_der().as_bytes()
        ));
    }

    #[test]
    fn test_invalid_point_rejected() {
        assert!(verifying_key_from_sec1(&[0x04; 65]).is_err());
        assert!(verifying_key_from_sec1(&[]).is_err());
        assert!(verifying_key_from_sec1(&[0x02]).is_err());
    }

    #[test]
    fn test_invalid_scalar_rejected() {
        assert!(signing_key_from_scalar(&[0u8; 32]).is_err());
        assert!(signing_key_from_scalar(&[0xff; 32]).is_err());
        assert!(signing_key_from_scalar(&[1, 2, 3]).is_err());
    }
}
