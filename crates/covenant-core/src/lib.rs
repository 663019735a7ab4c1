//! # covenant-core — Foundational Types for the Covenant Stack
//!
//! This crate is the bedrock of the Covenant attestation stack. It defines
//! the canonical serialization pipeline and the message digest primitives
//! every other crate builds on; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`CanonicalJson` newtype.** The canonical text of a value can only be
//!    produced through `CanonicalJson::new()` / `from_value()`, which sort
//!    object keys, render numbers positionally, and reject non-finite
//!    values. Structurally equal values always canonicalize to
//!    byte-identical text.
//!
//! 2. **Exact-decimal numbers.** `format_decimal()` expands every finite
//!    double to fixed-point decimal. Exponential notation never appears in
//!    canonical text, so independent implementations agree digit-for-digit.
//!
//! 3. **One hash for the whole stack.** SHA3-256 over the canonical text.
//!    `MessageDigest` carries the 32 bytes; there is no algorithm agility.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `covenant-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod decimal;
pub mod digest;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalJson;
pub use decimal::format_decimal;
pub use digest::{sha3_256_digest, sha3_256_hex, MessageDigest};
pub use error::CanonicalizationError;
