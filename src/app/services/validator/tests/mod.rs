//! Test fixtures for the validator
//!
//! Builders for in-memory datasets with controlled defects.

use chrono::{NaiveDate, NaiveDateTime};

use crate::app::models::Measurement;
use crate::app::services::csv_loader::{Dataset, LoadStats};


/// Timestamp on 2025-06-01 at the given hour and minute
pub fn ts(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// Measurement with all four numeric values present
pub fn measurement(timestamp: NaiveDateTime, voltage: f64, power: f64) -> Measurement {
    Measurement::new(
        timestamp,
        Some(voltage),
        Some(0.9),
        Some(power),
        Some(28.0),
    )
}

/// Ten in-order, in-range measurements at 15-minute spacing
pub fn clean_measurements() -> Vec<Measurement> {
    (0..10)
        .map(|i| measurement(ts(8 + i / 4, (i % 4) * 15), 45.0, 40.0))
        .collect()
}

/// Wrap measurements into a dataset with clean load statistics
pub fn dataset(measurements: Vec<Measurement>) -> Dataset {
    let stats = LoadStats {
        total_rows: measurements.len(),
        ..LoadStats::default()
    };
    Dataset::new(measurements, stats)
}
