//! Application constants for the solar analyzer
//!
//! This module contains the column contract, accepted timestamp formats,
//! default limits, and classification thresholds used throughout the
//! analysis pipeline.

// =============================================================================
// Input Schema
// =============================================================================

/// Column names required in every input file, in canonical order
pub const REQUIRED_COLUMNS: &[&str] = &[
    "timestamp",
    "voltage_V",
    "current_A",
    "power_W",
    "temperature_C",
];

/// Numeric measurement columns (required columns minus the timestamp)
pub const NUMERIC_COLUMNS: &[&str] = &["voltage_V", "current_A", "power_W", "temperature_C"];

/// Column count of a loaded dataset: the five input columns plus the
/// derived `date` and `hour` columns. Used to average null fractions.
pub const DATASET_COLUMN_COUNT: usize = 7;

/// Timestamp formats accepted by the loader, tried in order
pub const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Cell contents treated as a missing value (case-insensitive)
pub const MISSING_VALUE_MARKERS: &[&str] = &["", "nan", "null", "na"];

// =============================================================================
// Load Limits
// =============================================================================

/// Maximum accepted input file size in megabytes
pub const DEFAULT_MAX_FILE_SIZE_MB: usize = 100;

/// Minimum row count for an analysable dataset
pub const DEFAULT_MIN_ROWS: usize = 100;

// =============================================================================
// Validation Thresholds
// =============================================================================

/// Largest tolerated gap between consecutive sorted timestamps, in seconds
pub const MAX_TIME_GAP_SECONDS: i64 = 3600;

/// Average null fraction (percent) above which the dataset is rejected
pub const MISSING_DATA_ERROR_PCT: f64 = 20.0;

/// Average null fraction (percent) above which a warning is recorded
pub const MISSING_DATA_WARNING_PCT: f64 = 5.0;

/// Power readings above this multiple of the rated power are physically
/// implausible (the margin allows for measurement error)
pub const RATED_POWER_OUTLIER_FACTOR: f64 = 2.0;

/// Voltage readings above this multiple of the open-circuit voltage are
/// physically implausible
pub const VOC_OUTLIER_FACTOR: f64 = 1.2;

// =============================================================================
// Classification
// =============================================================================

/// Default clear-sky classification threshold
pub const DEFAULT_CLEAR_SKY_THRESHOLD: f64 = 0.70;

/// Lowest accepted classification threshold; lower inputs are clamped
pub const CLEAR_SKY_THRESHOLD_MIN: f64 = 0.5;

/// Highest accepted classification threshold; higher inputs are clamped
pub const CLEAR_SKY_THRESHOLD_MAX: f64 = 0.9;

/// Epsilon added to the median denominator to avoid division by zero
pub const RATIO_EPSILON: f64 = 1e-6;

/// A measurement classifies MARGINAL when its power ratio is at least this
/// fraction of the threshold but below the threshold itself
pub const MARGINAL_THRESHOLD_FACTOR: f64 = 0.5;

// =============================================================================
// Helpers
// =============================================================================

/// Check whether a raw cell value denotes a missing measurement
pub fn is_missing_value(raw: &str) -> bool {
    let trimmed = raw.trim();
    MISSING_VALUE_MARKERS
        .iter()
        .any(|marker| trimmed.eq_ignore_ascii_case(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_markers() {
        assert!(is_missing_value(""));
        assert!(is_missing_value("  "));
        assert!(is_missing_value("NaN"));
        assert!(is_missing_value("nan"));
        assert!(is_missing_value("NULL"));
        assert!(is_missing_value("na"));

        assert!(!is_missing_value("0"));
        assert!(!is_missing_value("12.5"));
        assert!(!is_missing_value("n/a maybe"));
    }

    #[test]
    fn test_required_columns_include_numeric_columns() {
        for col in NUMERIC_COLUMNS {
            assert!(REQUIRED_COLUMNS.contains(col));
        }
        assert_eq!(REQUIRED_COLUMNS.len(), NUMERIC_COLUMNS.len() + 1);
    }
}
