//! # Generic ASN.1 DER Reader
//!
//! A small, schema-free DER parser producing a tree of tagged values. Key
//! decoding walks this tree and validates the expected schema itself; the
//! parser knows nothing about keys.
//!
//! ## Parsing Rules
//!
//! - Identifier octets: class, constructed bit, and tag number including the
//!   high-tag-number form.
//! - Definite lengths only, short or long form. Indefinite (BER) lengths are
//!   rejected; non-minimal long-form encodings are tolerated.
//! - Constructed values have their content parsed into `children` exactly;
//!   primitive values keep raw content octets.
//! - Truncation, trailing bytes, oversized lengths, and over-deep nesting
//!   are errors, never panics or out-of-bounds reads.

use crate::error::DerError;

/// Universal tag numbers used by the key schemas.
pub const TAG_INTEGER: u32 = 0x02;
/// BIT STRING.
pub const TAG_BIT_STRING: u32 = 0x03;
/// OCTET STRING.
pub const TAG_OCTET_STRING: u32 = 0x04;
/// NULL.
pub const TAG_NULL: u32 = 0x05;
/// OBJECT IDENTIFIER.
pub const TAG_OBJECT_IDENTIFIER: u32 = 0x06;
/// SEQUENCE / SEQUENCE OF.
pub const TAG_SEQUENCE: u32 = 0x10;

/// Maximum nesting depth accepted by the parser.
const MAX_DEPTH: usize = 32;

/// Longest accepted length field, in octets. Four octets address 4 GiB,
/// far beyond any key material.
const MAX_LENGTH_OCTETS: usize = 4;

/// ASN.1 tag class from the identifier octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
    /// Universal (0b00).
    Universal,
    /// Application (0b01).
    Application,
    /// Context-specific (0b10).
    ContextSpecific,
    /// Private (0b11).
    Private,
}

/// A decoded ASN.1 tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    /// Tag class bits.
    pub class: TagClass,
    /// Constructed (true) or primitive (false).
    pub constructed: bool,
    /// Tag number, including high-tag-number form.
    pub number: u32,
}

impl Tag {
    /// True if this is a universal tag with the given number.
    pub fn is_universal(&self, number: u32) -> bool {
        self.class == TagClass::Universal && self.number == number
    }

    /// True if this is a context-specific tag with the given number.
    pub fn is_context(&self, number: u32) -> bool {
        self.class == TagClass::ContextSpecific && self.number == number
    }
}

/// A parsed DER value: tag, raw content octets, and (for constructed
/// values) the parsed child values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerValue<'a> {
    /// The value's tag.
    pub tag: Tag,
    /// Content octets, excluding tag and length.
    pub content: &'a [u8],
    /// Parsed children for constructed values; empty for primitives.
    pub children: Vec<DerValue<'a>>,
}

/// Parse a complete DER-encoded value.
///
/// # Errors
///
/// Returns a `DerError` if the input is truncated, carries trailing bytes
/// after the top-level value, uses indefinite lengths, or nests deeper than
/// the parser's bound.
pub fn parse(input: &[u8]) -> Result<DerValue<'_>, DerError> {
    let (value, rest) = parse_value(input, 0, MAX_DEPTH)?;
    if !rest.is_empty() {
        return Err(DerError::TrailingBytes(rest.len()));
    }
    Ok(value)
}

/// Parse one TLV at the head of `input`; `offset` is the absolute position
/// of `input[0]` in the original buffer, used only for error reporting.
fn parse_value(input: &[u8], offset: usize, depth: usize) -> Result<(DerValue<'_>, &[u8]), DerError> {
    if depth == 0 {
        return Err(DerError::DepthExceeded(MAX_DEPTH));
    }
    let (tag, tag_len) = parse_tag(input, offset)?;
    let (length, len_len) = parse_length(&input[tag_len..], offset + tag_len)?;
    let header = tag_len + len_len;
    let end = header
        .checked_add(length)
        .ok_or(DerError::LengthOverflow)?;
    if input.len() < end {
        return Err(DerError::Truncated(offset + input.len()));
    }
    let content = &input[header..end];
    let children = if tag.constructed {
        parse_children(content, offset + header, depth - 1)?
    } else {
        Vec::new()
    };
    Ok((
        DerValue {
            tag,
            content,
            children,
        },
        &input[end..],
    ))
}

/// Parse the identifier octets. Returns the tag and the octet count.
fn parse_tag(input: &[u8], offset: usize) -> Result<(Tag, usize), DerError> {
    let first = *input.first().ok_or(DerError::Truncated(offset))?;
    let class = match first >> 6 {
        0 => TagClass::Universal,
        1 => TagClass::Application,
        2 => TagClass::ContextSpecific,
        _ => TagClass::Private,
    };
    let constructed = first & 0x20 != 0;
    let mut consumed = 1;
    let number = if first & 0x1f != 0x1f {
        u32::from(first & 0x1f)
    } else {
        // High-tag-number form: base-128 digits, bit 8 is the
        // continuation flag.
        let mut n: u32 = 0;
        loop {
            let b = *input
                .get(consumed)
                .ok_or(DerError::Truncated(offset + consumed))?;
            consumed += 1;
            n = n
                .checked_mul(128)
                .and_then(|n| n.checked_add(u32::from(b & 0x7f)))
                .ok_or(DerError::TagOverflow)?;
            if b & 0x80 == 0 {
                break;
            }
        }
        n
    };
    Ok((
        Tag {
            class,
            constructed,
            number,
        },
        consumed,
    ))
}

/// Parse the length octets. Returns the content length and the octet count.
fn parse_length(input: &[u8], offset: usize) -> Result<(usize, usize), DerError> {
    let first = *input.first().ok_or(DerError::Truncated(offset))?;
    if first & 0x80 == 0 {
        return Ok((usize::from(first), 1));
    }
    let count = usize::from(first & 0x7f);
    if count == 0 {
        return Err(DerError::IndefiniteLength);
    }
    if count > MAX_LENGTH_OCTETS {
        return Err(DerError::LengthOverflow);
    }
    let mut length: usize = 0;
    for i in 0..count {
        let b = *input
            .get(1 + i)
            .ok_or(DerError::Truncated(offset + 1 + i))?;
        length = (length << 8) | usize::from(b);
    }
    Ok((length, 1 + count))
}

/// Parse the concatenated children of a constructed value.
fn parse_children(content: &[u8], offset: usize, depth: usize) -> Result<Vec<DerValue<'_>>, DerError> {
    let mut children = Vec::new();
    let mut rest = content;
    let mut pos = offset;
    while !rest.is_empty() {
        let before = rest.len();
        let (child, next) = parse_value(rest, pos, depth)?;
        pos += before - next.len();
        rest = next;
        children.push(child);
    }
    Ok(children)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The parser returns a result for arbitrary bytes; it never panics
        /// or reads out of bounds.
        #[test]
        fn never_panics_on_arbitrary_input(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
            let _ = parse(&bytes);
        }

        /// A SEQUENCE of n NULLs parses to exactly n children.
        #[test]
        fn sequence_of_nulls(n in 0usize..40) {
            let mut der = vec![0x30, (2 * n) as u8];
            for _ in 0..n {
                der.extend_from_slice(&[0x05, 0x00]);
            }
            let v = parse(&der).unwrap();
            prop_assert_eq!(v.children.len(), n);
        }
    }
}
