//! # Error Types — Canonicalization Failures
//!
//! Errors produced while rendering values to canonical form. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations and are
//! returned as explicit `Result` values, never thrown as panics.

use thiserror::Error;

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Non-finite numbers (NaN, infinities) have no positional decimal
    /// rendering and cannot appear in a signed message.
    #[error("non-finite number cannot be canonicalized: {0}")]
    NonFinite(f64),

    /// JSON serialization of the input value failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
