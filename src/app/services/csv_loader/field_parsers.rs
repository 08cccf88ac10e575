//! Cell-level parsing for measurement records
//!
//! This module provides helper functions for coercing raw CSV cells into
//! timestamps and numeric values, distinguishing missing values from
//! non-numeric garbage.

use chrono::{DateTime, NaiveDateTime};
use csv::StringRecord;

use crate::constants::{TIMESTAMP_FORMATS, is_missing_value};

/// Outcome of coercing one numeric cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericCell {
    /// Cell parsed as a finite number
    Value(f64),
    /// Cell was empty or carried a missing-value marker
    Missing,
    /// Cell held text that is neither numeric nor a missing marker
    Invalid,
}

/// Parse a timestamp cell against the accepted formats
///
/// Tries the plain formats first, then an RFC 3339 / offset-carrying
/// variant whose offset is discarded (timestamps are local to the panel).
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();

    for format in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }

    None
}

/// Coerce a numeric cell, distinguishing missing from invalid content
///
/// Signed NaN spellings (`-nan`, `+NaN`) parse as numbers but carry no
/// value; they load as missing like the bare `nan` marker does.
pub fn parse_numeric(value: &str) -> NumericCell {
    let trimmed = value.trim();

    if is_missing_value(trimmed) {
        return NumericCell::Missing;
    }

    match trimmed.parse::<f64>() {
        Ok(v) if v.is_nan() => NumericCell::Missing,
        Ok(v) => NumericCell::Value(v),
        Err(_) => NumericCell::Invalid,
    }
}

/// Get a cell by index, treating an absent field as an empty cell
pub fn get_field<'a>(record: &'a StringRecord, index: usize) -> &'a str {
    record.get(index).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(13, 30, 0)
            .unwrap();

        assert_eq!(parse_timestamp("2025-06-15 13:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-06-15T13:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-06-15 13:30"), Some(expected));
        assert_eq!(parse_timestamp("2025/06/15 13:30:00"), Some(expected));
        assert_eq!(parse_timestamp(" 2025-06-15 13:30:00 "), Some(expected));
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert_eq!(parse_timestamp("not a date"), None);
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("15/06/2025"), None);
    }

    #[test]
    fn test_parse_numeric_variants() {
        assert_eq!(parse_numeric("42.5"), NumericCell::Value(42.5));
        assert_eq!(parse_numeric(" -3.2 "), NumericCell::Value(-3.2));
        assert_eq!(parse_numeric("0"), NumericCell::Value(0.0));

        assert_eq!(parse_numeric(""), NumericCell::Missing);
        assert_eq!(parse_numeric("NaN"), NumericCell::Missing);
        assert_eq!(parse_numeric("null"), NumericCell::Missing);

        // Signed NaN spellings parse as f64 NaN; they must not slip
        // through as values
        assert_eq!(parse_numeric("-nan"), NumericCell::Missing);
        assert_eq!(parse_numeric("+nan"), NumericCell::Missing);
        assert_eq!(parse_numeric("-NaN"), NumericCell::Missing);

        assert_eq!(parse_numeric("abc"), NumericCell::Invalid);
        assert_eq!(parse_numeric("12.3V"), NumericCell::Invalid);
    }
}
