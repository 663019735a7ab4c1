//! # Message Digests — SHA3-256
//!
//! The hash applied to canonical message text before signing. The algorithm
//! is fixed for the whole platform: SHA3-256 over the UTF-8 bytes of the
//! serialized message, never over the in-memory value.

use sha3::{Digest, Sha3_256};

/// A 32-byte SHA3-256 digest of serialized message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageDigest([u8; 32]);

impl MessageDigest {
    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for MessageDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Compute the SHA3-256 digest of serialized message bytes.
pub fn sha3_256_digest(data: &[u8]) -> MessageDigest {
    let hash = Sha3_256::digest(data);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    MessageDigest(bytes)
}

/// Convenience wrapper returning the digest as a hex string.
pub fn sha3_256_hex(data: &[u8]) -> String {
    sha3_256_digest(data).to_hex()
}
