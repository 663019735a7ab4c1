//! # Exact Decimal Formatting — Positional Number Rendering
//!
//! Renders IEEE-754 doubles in fixed-point decimal, never exponential
//! notation. Exponential renderings are not byte-stable across runtimes and
//! locales, so two independent implementations signing the same logical
//! number could disagree on the hashed bytes. Positional expansion removes
//! that ambiguity at the cost of verbose output for extreme magnitudes
//! (hundreds of digits of zero padding at the f64 range limits).
//!
//! ## Cross-Language Compatibility
//!
//! Output is digit-for-digit identical to the platform's other SDK
//! implementations: `0.000000123456789`, never `1.23456789e-7`;
//! `900000123456789`, never `9.00000123456789e14`. Integer-valued doubles
//! render without a trailing `.0`.

use crate::error::CanonicalizationError;

/// Render a double in positional decimal form.
///
/// Starts from the shortest round-trip scientific rendering and expands it:
/// the digit string is zero-padded on the left (`0.000…digits`) for negative
/// effective magnitudes, zero-padded on the right for magnitudes beyond the
/// digit count, or split with an interior decimal point otherwise. Negative
/// zero renders as `0`.
///
/// # Errors
///
/// Returns `CanonicalizationError::NonFinite` for NaN and infinities; every
/// finite double produces a string.
pub fn format_decimal(value: f64) -> Result<String, CanonicalizationError> {
    if !value.is_finite() {
        return Err(CanonicalizationError::NonFinite(value));
    }

    // Shortest digits that round-trip, with an explicit exponent.
    let sci = format!("{value:e}");
    let (mantissa, exp_part) = match sci.split_once('e') {
        Some(parts) => parts,
        // No exponent marker means the rendering is already positional.
        None => return Ok(sci),
    };
    // `{:e}` emits a plain decimal exponent for every finite double; an
    // absent value means a bare mantissa (exponent zero).
    let exponent: i32 = exp_part.parse().unwrap_or(0);

    let negative = value < 0.0;
    let digits: String = mantissa
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    let sign = if negative { "-" } else { "" };

    // Index of the decimal point relative to the start of `digits`.
    let effective = exponent + 1;
    let len = digits.len() as i32;

    let rendered = if effective <= 0 {
        // 1.23e-7 => 0.000000123
        let zeros = "0".repeat((-effective) as usize);
        format!("{sign}0.{zeros}{digits}")
    } else if effective >= len {
        // 9.1e14 => 910000000000000
        let zeros = "0".repeat((effective - len) as usize);
        format!("{sign}{digits}{zeros}")
    } else {
        // 1.23456e2 => 123.456
        let (int_part, frac_part) = digits.split_at(effective as usize);
        format!("{sign}{int_part}.{frac_part}")
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64) -> String {
        format_decimal(value).expect("finite value must format")
    }

    #[test]
    fn test_small_magnitudes_expand_left() {
        assert_eq!(fmt(0.000000123456789), "0.000000123456789");
        assert_eq!(fmt(-0.000000123456789), "-0.000000123456789");
    }

    #[test]
    fn test_large_magnitudes_expand_right() {
        assert_eq!(fmt(900000123456789.0), "900000123456789");
        assert_eq!(fmt(-900000123456789.0), "-900000123456789");
        assert_eq!(fmt(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_max_safe_integer() {
        assert_eq!(fmt(9007199254740991.0), "9007199254740991");
        assert_eq!(fmt(-9007199254740991.0), "-9007199254740991");
    }

    #[test]
    fn test_interior_decimal_point() {
        assert_eq!(fmt(123.456), "123.456");
        assert_eq!(fmt(-123.456), "-123.456");
        assert_eq!(fmt(1500.5), "1500.5");
        assert_eq!(fmt(0.5), "0.5");
        assert_eq!(fmt(1.5), "1.5");
    }

    #[test]
    fn test_integer_valued_doubles_have_no_fraction() {
        assert_eq!(fmt(0.0), "0");
        assert_eq!(fmt(1.0), "1");
        assert_eq!(fmt(42.0), "42");
        assert_eq!(fmt(-42.0), "-42");
    }

    #[test]
    fn test_negative_zero_renders_unsigned() {
        assert_eq!(fmt(-0.0), "0");
    }

    #[test]
    fn test_f64_max_expands_fully() {
        let s = fmt(f64::MAX);
        assert_eq!(s.len(), 309);
        assert!(s.starts_with("17976931348623157"));
        assert!(s[17..].bytes().all(|b| b == b'0'));
    }

    #[test]
    fn test_f64_min_positive_expands_fully() {
        // Smallest positive subnormal, 5e-324.
        let s = fmt(5e-324);
        assert_eq!(s.len(), 2 + 323 + 1);
        assert!(s.starts_with("0."));
        assert!(s[2..325].bytes().all(|b| b == b'0'));
        assert!(s.ends_with('5'));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(format_decimal(f64::NAN).is_err());
        assert!(format_decimal(f64::INFINITY).is_err());
        assert!(format_decimal(f64::NEG_INFINITY).is_err());
    }
}
