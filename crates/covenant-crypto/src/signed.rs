//! # Signed Message Envelopes
//!
//! A [`Signed<T>`] pairs a message with an ECDSA signature over its
//! serialized form. The serializer is injected by the caller, so the
//! envelope works for any message type, but signer and verifier must agree
//! on the serialization or verification fails. [`sign_canonical`] and
//! [`check_signature_canonical`] fix the serializer to canonical JSON,
//! which is the stack-wide convention.
//!
//! ## Wire Format
//!
//! Envelopes serialize as plain JSON records:
//!
//! ```json
//! {
//!   "message": { ... },
//!   "sig": {
//!     "tag": "ECDSASignature",
//!     "signature": { "bytes": "<base64 DER>" }
//!   }
//! }
//! ```
//!
//! ## Security Invariant
//!
//! Verification failure is a value, not an error: a wrong key, a tampered
//! message, or signature bytes that do not decode all yield `Ok(false)`.
//! Errors are reserved for inputs that never reach the curve, such as an
//! unparseable key or a serializer failure.

use serde::{Deserialize, Serialize};

use base64::{engine::general_purpose::STANDARD, Engine as _};

use covenant_core::{sha3_256_digest, CanonicalJson, CanonicalizationError};

use crate::ecdsa;
use crate::error::{CheckError, SignError};
use crate::keys::{
    decode_private_key_bytes, decode_public_key_bytes, EcdsaPrivateKey, EcdsaPublicKey,
};

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Discriminator tag for signature records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignatureTag {
    #[serde(rename = "ECDSASignature")]
    EcdsaSignature,
}

/// Base64 transport wrapper for the raw DER signature bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureBytes {
    bytes: String,
}

/// A tagged ECDSA signature as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdsaSignature {
    tag: SignatureTag,
    signature: SignatureBytes,
}

impl EcdsaSignature {
    /// Wrap DER-encoded signature bytes for transport.
    pub fn from_der(der: &[u8]) -> Self {
        Self {
            tag: SignatureTag::EcdsaSignature,
            signature: SignatureBytes {
                bytes: STANDARD.encode(der),
            },
        }
    }

    /// Decode back to raw DER bytes.
    ///
    /// # Errors
    ///
    /// Fails if the transport encoding is not valid base64. Callers on the
    /// verification path treat that as a failed check rather than an error.
    pub fn to_der_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.signature.bytes)
    }

    /// The base64 transport form.
    pub fn as_base64(&self) -> &str {
        &self.signature.bytes
    }
}

/// A message together with a signature over its serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signed<T> {
    message: T,
    sig: EcdsaSignature,
}

impl<T> Signed<T> {
    /// Reassemble an envelope from a message and signature received
    /// separately, for example from a transport that splits the two.
    pub fn from_parts(message: T, sig: EcdsaSignature) -> Self {
        Self { message, sig }
    }

    /// The signed message.
    pub fn message(&self) -> &T {
        &self.message
    }

    /// The signature record.
    pub fn sig(&self) -> &EcdsaSignature {
        &self.sig
    }

    /// Discard the signature and take ownership of the message.
    pub fn into_message(self) -> T {
        self.message
    }
}

// ---------------------------------------------------------------------------
// Signing and verification
// ---------------------------------------------------------------------------

/// Sign a message with an injected serializer.
///
/// The signature is computed over the SHA3-256 digest of the serializer's
/// output. Key decoding happens before serialization so that an unusable
/// key fails fast regardless of the message.
///
/// # Errors
///
/// Fails if the private key does not decode, the scalar is not valid for
/// secp256k1, or the serializer fails.
pub fn sign<T, F>(
    key: &EcdsaPrivateKey,
    message: T,
    serializer: F,
) -> Result<Signed<T>, SignError>
where
    F: FnOnce(&T) -> Result<String, CanonicalizationError>,
{
    let scalar = decode_private_key_bytes(key.pem())?;
    let signing_key = ecdsa::signing_key_from_scalar(&scalar)?;

    let serialized = serializer(&message)?;
    let digest = sha3_256_digest(serialized.as_bytes());
    let der = ecdsa::sign(&signing_key, &digest)?;

    Ok(Signed {
        message,
        sig: EcdsaSignature::from_der(&der),
    })
}

/// Verify a signed envelope with an injected serializer.
///
/// Returns `Ok(false)` when the signature does not match, including when
/// the signature bytes fail to decode as base64 or DER.
///
/// # Errors
///
/// Fails if the public key does not decode, the point is not on
/// secp256k1, or the serializer fails.
pub fn check_signature<T, F>(
    key: &EcdsaPublicKey,
    signed: &Signed<T>,
    serializer: F,
) -> Result<bool, CheckError>
where
    F: FnOnce(&T) -> Result<String, CanonicalizationError>,
{
    let point = decode_public_key_bytes(key.pem())?;
    let verifying_key = ecdsa::verifying_key_from_sec1(&point)?;

    let serialized = serializer(&signed.message)?;
    let digest = sha3_256_digest(serialized.as_bytes());

    let Ok(der) = signed.sig.to_der_bytes() else {
        return Ok(false);
    };
    Ok(ecdsa::verify(&verifying_key, &digest, &der))
}

/// Sign a message serialized as canonical JSON.
pub fn sign_canonical<T: Serialize>(
    key: &EcdsaPrivateKey,
    message: T,
) -> Result<Signed<T>, SignError> {
    sign(key, message, |m| {
        CanonicalJson::new(m).map(CanonicalJson::into_string)
    })
}

/// Verify an envelope signed over canonical JSON.
pub fn check_signature_canonical<T: Serialize>(
    key: &EcdsaPublicKey,
    signed: &Signed<T>,
) -> Result<bool, CheckError> {
    check_signature(key, signed, |m| {
        CanonicalJson::new(m).map(CanonicalJson::into_string)
    })
}
