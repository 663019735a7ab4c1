//! # PEM Unarmoring
//!
//! Strips the `-----BEGIN ...-----` / `-----END ...-----` armor around
//! Base64-encoded DER and decodes the body. Label-agnostic: the same routine
//! handles `PUBLIC KEY`, `EC PRIVATE KEY`, or any other label, but the BEGIN
//! and END labels must agree. Text outside the armor (file preambles,
//! trailing newlines) is ignored.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::KeyDecodeError;

const BEGIN_PREFIX: &str = "-----BEGIN ";
const END_PREFIX: &str = "-----END ";
const DASHES: &str = "-----";

/// Decode the armored Base64 body of a PEM blob into raw DER bytes.
///
/// # Errors
///
/// Returns `KeyDecodeError::Armor` for missing, duplicated, or mismatched
/// armor lines, and `KeyDecodeError::Base64` if the body does not decode.
pub fn unarmor(pem: &str) -> Result<Vec<u8>, KeyDecodeError> {
    let mut label: Option<&str> = None;
    let mut body = String::new();
    let mut closed = false;

    for line in pem.lines() {
        let line = line.trim();
        if let Some(begin_label) = armor_label(line, BEGIN_PREFIX) {
            if label.is_some() {
                return Err(KeyDecodeError::Armor("multiple BEGIN lines".into()));
            }
            label = Some(begin_label);
            continue;
        }
        if let Some(end_label) = armor_label(line, END_PREFIX) {
            match label {
                None => {
                    return Err(KeyDecodeError::Armor("END before BEGIN".into()));
                }
                Some(begin_label) if begin_label != end_label => {
                    return Err(KeyDecodeError::Armor(format!(
                        "BEGIN {begin_label} closed by END {end_label}"
                    )));
                }
                Some(_) => {
                    closed = true;
                    break;
                }
            }
        }
        if label.is_some() && !line.is_empty() {
            body.push_str(line);
        }
    }

    if label.is_none() {
        return Err(KeyDecodeError::Armor("missing BEGIN line".into()));
    }
    if !closed {
        return Err(KeyDecodeError::Armor("missing END line".into()));
    }
    Ok(STANDARD.decode(body.as_bytes())?)
}

/// Extract the label from an armor line of the given kind, if it is one.
fn armor_label<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.strip_prefix(prefix)?.strip_suffix(DASHES)
}
