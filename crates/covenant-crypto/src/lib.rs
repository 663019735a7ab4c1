//! # covenant-crypto — Key Handling and Attestation for the Covenant Stack
//!
//! This crate provides the signing layer used throughout the workspace:
//!
//! - **PEM and DER decoding** of secp256k1 key material, with a
//!   schema-checking ASN.1 walk that rejects malformed structures before
//!   any curve arithmetic runs.
//! - **ECDSA** signing and verification over SHA3-256 digests of
//!   canonical JSON from [`covenant-core`](covenant_core).
//! - **[`Signed<T>`](signed::Signed)** envelopes pairing a message with a
//!   signature over its serialized form, with the serializer injected by
//!   the caller.
//! - **Key generation** producing PEM-armored keypairs ready for the
//!   decoders above.
//!
//! ## Security Invariant
//!
//! Unusable key material is an error; a failed check is a value. Key
//! decoding failures surface as `Err` before any signature is examined,
//! while a wrong key, tampered message, or undecodable signature yields
//! `Ok(false)` from verification. Callers can therefore branch on the
//! boolean without conflating "not authentic" with "could not check".

pub mod asn1;
pub mod ecdsa;
pub mod error;
pub mod keys;
pub mod pem;
pub mod signed;

// Re-export primary types.
pub use error::{CheckError, CurveError, DerError, KeyDecodeError, KeyGenError, SignError};
pub use keys::{
    decode_private_key_bytes, decode_public_key_bytes, generate_keypair, CurveName,
    EcdsaPrivateKey, EcdsaPublicKey,
};
pub use signed::{
    check_signature, check_signature_canonical, sign, sign_canonical, EcdsaSignature, Signed,
};
