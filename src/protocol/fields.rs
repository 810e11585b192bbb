//! # Field Formatting
//!
//! Control codes are built from fixed-width ASCII fields. Each helper here
//! validates one raw parameter and renders it the way the printer expects:
//!
//! | Helper | Input | Output (width 3) |
//! |--------|-------|------------------|
//! | [`digits`] | `"4"` | `"004"` |
//! | [`signed`] | `"4"`, `"-12"` | `"+004"`, `"-012"` |
//! | [`verbatim_digits`] | `"05"` | `"05"` (no padding) |
//! | [`code`] | `"G"` | `"G"` |
//!
//! A value that cannot fit its field is rejected with
//! [`LabelPrinterError::MalformedControlValue`]; nothing is ever truncated.

use super::Kind;
use crate::error::LabelPrinterError;

/// Left zero-pad an unsigned decimal field to `width`.
///
/// ```
/// use label_printer::protocol::{fields, Kind};
///
/// assert_eq!(fields::digits(Kind::BitmapDraw, "id", "7", 3)?, "007");
/// # Ok::<(), label_printer::LabelPrinterError>(())
/// ```
pub fn digits(
    command: Kind,
    field: &'static str,
    value: &str,
    width: usize,
) -> Result<String, LabelPrinterError> {
    check_digits(command, field, value, value, width)?;
    Ok(format!("{:0>width$}", value, width = width))
}

/// Render a signed decimal field: sign (default `+`) then `width` digits.
pub fn signed(
    command: Kind,
    field: &'static str,
    value: &str,
    width: usize,
) -> Result<String, LabelPrinterError> {
    let (sign, magnitude) = match value.as_bytes().first() {
        Some(b'+') => ('+', &value[1..]),
        Some(b'-') => ('-', &value[1..]),
        _ => ('+', value),
    };
    check_digits(command, field, value, magnitude, width)?;
    Ok(format!("{}{:0>width$}", sign, magnitude, width = width))
}

/// Validate a decimal field of at most `max_width` digits, passed through as given.
pub fn verbatim_digits(
    command: Kind,
    field: &'static str,
    value: &str,
    max_width: usize,
) -> Result<String, LabelPrinterError> {
    check_digits(command, field, value, value, max_width)?;
    Ok(value.to_string())
}

/// Validate a short alphanumeric code (font, barcode type) of exactly one
/// to `max_width` characters.
pub fn code(
    command: Kind,
    field: &'static str,
    value: &str,
    max_width: usize,
) -> Result<String, LabelPrinterError> {
    if value.is_empty() {
        return Err(LabelPrinterError::malformed(command, field, value, "empty value"));
    }
    if !value.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(LabelPrinterError::malformed(
            command,
            field,
            value,
            "expected ASCII letters or digits",
        ));
    }
    if value.len() > max_width {
        return Err(LabelPrinterError::malformed(
            command,
            field,
            value,
            format!("wider than {} characters", max_width),
        ));
    }
    Ok(value.to_string())
}

fn check_digits(
    command: Kind,
    field: &'static str,
    value: &str,
    magnitude: &str,
    width: usize,
) -> Result<(), LabelPrinterError> {
    if magnitude.is_empty() {
        return Err(LabelPrinterError::malformed(command, field, value, "no digits"));
    }
    if !magnitude.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LabelPrinterError::malformed(command, field, value, "expected decimal digits"));
    }
    if magnitude.len() > width {
        return Err(LabelPrinterError::malformed(
            command,
            field,
            value,
            format!("wider than {} digits", width),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const K: Kind = Kind::AdjustPosition;

    #[test]
    fn test_digits_pads() {
        assert_eq!(digits(K, "f", "1", 4).unwrap(), "0001");
        assert_eq!(digits(K, "f", "0300", 4).unwrap(), "0300");
    }

    #[test]
    fn test_digits_rejects_wide_values() {
        let err = digits(K, "f", "12345", 4).unwrap_err();
        assert!(matches!(
            err,
            LabelPrinterError::MalformedControlValue { field: "f", .. }
        ));
    }

    #[test]
    fn test_digits_rejects_non_digits() {
        assert!(digits(K, "f", "12a", 4).is_err());
        assert!(digits(K, "f", "", 4).is_err());
        assert!(digits(K, "f", "-1", 4).is_err());
    }

    #[test]
    fn test_signed() {
        assert_eq!(signed(K, "f", "004", 3).unwrap(), "+004");
        assert_eq!(signed(K, "f", "25", 3).unwrap(), "+025");
        assert_eq!(signed(K, "f", "+7", 2).unwrap(), "+07");
        assert_eq!(signed(K, "f", "-12", 2).unwrap(), "-12");
    }

    #[test]
    fn test_signed_rejects() {
        assert!(signed(K, "f", "+", 2).is_err());
        assert!(signed(K, "f", "-123", 2).is_err());
        assert!(signed(K, "f", "+-1", 2).is_err());
    }

    #[test]
    fn test_verbatim_digits_keeps_width() {
        assert_eq!(verbatim_digits(K, "f", "1", 2).unwrap(), "1");
        assert_eq!(verbatim_digits(K, "f", "05", 2).unwrap(), "05");
        assert!(verbatim_digits(K, "f", "123", 2).is_err());
    }

    #[test]
    fn test_code() {
        assert_eq!(code(K, "font", "G", 1).unwrap(), "G");
        assert!(code(K, "font", "GG", 1).is_err());
        assert!(code(K, "font", "", 1).is_err());
        assert!(code(K, "font", ",", 1).is_err());
    }
}
