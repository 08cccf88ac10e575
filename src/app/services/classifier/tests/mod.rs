//! Test fixtures for the classifier
//!
//! Builds the synthetic multi-day measurement sets the classification
//! tests reason about.

use chrono::NaiveDate;

use crate::app::models::Measurement;

mod classifier_tests;

/// Measurement on a June 2025 day at the given hour with the given power
pub fn at(day: u32, hour: u32, power: Option<f64>) -> Measurement {
    let timestamp = NaiveDate::from_ymd_opt(2025, 6, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap();
    Measurement::new(timestamp, Some(45.0), Some(0.9), power, Some(28.0))
}

/// Three synthetic days with distinct midday and night power plateaus
///
/// Midday hours are 10-14, night hours 0-4. Day 1 is strong (40W/5W),
/// day 2 weak (15W/2W), day 3 middling (25W/3W), so the midday
/// hour-of-day medians are all 25 and the night medians all 3.
pub fn three_synthetic_days() -> Vec<Measurement> {
    let day_power = [(1, 40.0, 5.0), (2, 15.0, 2.0), (3, 25.0, 3.0)];

    let mut measurements = Vec::new();
    for (day, midday, night) in day_power {
        for hour in 0..5 {
            measurements.push(at(day, hour, Some(night)));
        }
        for hour in 10..15 {
            measurements.push(at(day, hour, Some(midday)));
        }
    }
    measurements
}
