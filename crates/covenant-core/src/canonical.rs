//! # Canonical Serialization — Deterministic JSON Text Production
//!
//! This module defines `CanonicalJson`, the canonical textual encoding of a
//! structured value: the string that gets hashed and signed across the
//! platform.
//!
//! ## Security Invariant
//!
//! The `CanonicalJson` newtype has a private inner field. The only ways to
//! construct it are `CanonicalJson::new()` and `CanonicalJson::from_value()`,
//! both of which apply the full canonicalization pipeline: lexicographic key
//! sorting, positional exact-decimal number rendering, and non-finite
//! rejection. Structurally equal values always produce byte-identical
//! canonical text, regardless of field insertion order.
//!
//! ## Cross-Language Compatibility
//!
//! The output dialect matches the platform's other SDK implementations:
//! compact separators, lexicographically sorted object keys, standard JSON
//! string escaping, and numbers rendered by [`format_decimal`] (never
//! exponential notation). Arrays keep their element order; list order is
//! semantically significant.

use serde::Serialize;
use serde_json::Value;

use crate::decimal::format_decimal;
use crate::error::CanonicalizationError;

/// Canonical JSON text produced exclusively by the deterministic
/// serialization pipeline.
///
/// # Invariants
///
/// - Object keys are sorted lexicographically by their raw string bytes.
/// - Array element order is preserved.
/// - Numbers are rendered in positional decimal, never exponential form.
/// - Non-finite numbers are rejected at construction.
///
/// These invariants are enforced by the constructors and cannot be violated
/// by downstream code because the inner `String` is private.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalJson(String);

impl CanonicalJson {
    /// Canonicalize any serializable value.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::NonFinite` if the value contains a
    /// NaN or infinity, and `CanonicalizationError::Serialization` if the
    /// value cannot be represented as JSON at all.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        Self::from_value(&value)
    }

    /// Canonicalize an already-parsed JSON value.
    pub fn from_value(value: &Value) -> Result<Self, CanonicalizationError> {
        let mut out = String::new();
        write_value(&mut out, value)?;
        Ok(Self(out))
    }

    /// The canonical text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical text as bytes, for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Consume the wrapper, returning the canonical text.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Length of the canonical text in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical text is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for CanonicalJson {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CanonicalJson {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Recursively render a JSON value in canonical form.
///
/// Object keys are collected and sorted explicitly rather than trusting the
/// map's iteration order, so the output is identical whether or not the
/// `preserve_order` feature of `serde_json` is active anywhere in the build.
fn write_value(out: &mut String, value: &Value) -> Result<(), CanonicalizationError> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => write_number(out, n)?,
        Value::String(s) => write_string(out, s)?,
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key)?;
                out.push(':');
                write_value(out, item)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

/// Render a number token.
///
/// Integers use their exact decimal representation; doubles go through the
/// positional expansion in [`format_decimal`]. Without the
/// `arbitrary_precision` feature a `serde_json::Number` is always one of
/// i64, u64, or f64; the final arm renders the raw token for completeness.
fn write_number(out: &mut String, n: &serde_json::Number) -> Result<(), CanonicalizationError> {
    if let Some(i) = n.as_i64() {
        out.push_str(&i.to_string());
    } else if let Some(u) = n.as_u64() {
        out.push_str(&u.to_string());
    } else if let Some(f) = n.as_f64() {
        out.push_str(&format_decimal(f)?);
    } else {
        out.push_str(&n.to_string());
    }
    Ok(())
}

/// Render a string token with standard JSON escaping.
fn write_string(out: &mut String, s: &str) -> Result<(), CanonicalizationError> {
    out.push_str(&serde_json::to_string(s)?);
    Ok(())
}
