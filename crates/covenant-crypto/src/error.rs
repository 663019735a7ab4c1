//! # Error Types — Key Decoding, Signing, and Verification Failures
//!
//! One enum per failure domain, composed with `#[from]` conversions so the
//! decode → sign → verify pipeline propagates errors with `?` and callers can
//! distinguish "key was malformed" from "signature is invalid" from
//! "signature is valid". A failed verification is NOT an error anywhere in
//! this crate; it is the `false` arm of a successful check.

use covenant_core::CanonicalizationError;
use thiserror::Error;

/// Error while parsing a DER-encoded ASN.1 structure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DerError {
    /// Input ended inside a tag, length, or content field.
    #[error("truncated DER structure at offset {0}")]
    Truncated(usize),

    /// Bytes remain after the top-level value.
    #[error("{0} trailing bytes after top-level DER value")]
    TrailingBytes(usize),

    /// BER indefinite lengths are not valid DER.
    #[error("indefinite length is not permitted in DER")]
    IndefiniteLength,

    /// Length field wider than this parser accepts.
    #[error("DER length field too large")]
    LengthOverflow,

    /// High-tag-number form exceeded the supported range.
    #[error("DER tag number overflows u32")]
    TagOverflow,

    /// Constructed values nested beyond the supported bound.
    #[error("DER nesting exceeds maximum depth {0}")]
    DepthExceeded(usize),
}

/// Error while decoding PEM-armored key material.
#[derive(Error, Debug)]
pub enum KeyDecodeError {
    /// PEM armor lines are missing or inconsistent.
    #[error("malformed PEM armor: {0}")]
    Armor(String),

    /// The armored body is not valid Base64.
    #[error("malformed Base64 in PEM body: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded bytes are not well-formed DER.
    #[error("malformed DER: {0}")]
    Der(#[from] DerError),

    /// The DER parsed but does not match the expected key schema.
    #[error("unexpected key structure: {0}")]
    Structure(String),
}

/// Error constructing curve objects from decoded key bytes.
#[derive(Error, Debug)]
pub enum CurveError {
    /// The bytes do not encode a point on secp256k1.
    #[error("invalid public key point: {0}")]
    InvalidPoint(String),

    /// The bytes do not encode a valid private scalar.
    #[error("invalid private key scalar: {0}")]
    InvalidScalar(String),
}

/// Error while generating a fresh keypair.
#[derive(Error, Debug)]
pub enum KeyGenError {
    /// PEM encoding of the generated key material failed.
    #[error("PEM encoding failed: {0}")]
    Encode(String),
}

/// Error producing a signed envelope.
#[derive(Error, Debug)]
pub enum SignError {
    /// The private key PEM could not be decoded.
    #[error("key decoding failed: {0}")]
    KeyDecode(#[from] KeyDecodeError),

    /// The decoded bytes were rejected by the curve.
    #[error("curve rejected key material: {0}")]
    Curve(#[from] CurveError),

    /// The message could not be serialized for hashing.
    #[error("message serialization failed: {0}")]
    Serialization(#[from] CanonicalizationError),

    /// The curve failed to produce a signature.
    #[error("signature production failed: {0}")]
    Signature(String),
}

/// Error while checking a signed envelope.
///
/// A signature that simply does not match is `Ok(false)` from
/// `check_signature`, never a `CheckError`.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The public key PEM could not be decoded.
    #[error("key decoding failed: {0}")]
    KeyDecode(#[from] KeyDecodeError),

    /// The decoded bytes were rejected by the curve.
    #[error("curve rejected key material: {0}")]
    Curve(#[from] CurveError),

    /// The message could not be serialized for hashing.
    #[error("message serialization failed: {0}")]
    Serialization(#[from] CanonicalizationError),
}
