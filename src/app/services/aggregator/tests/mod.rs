//! Test fixtures for the aggregator

use chrono::{NaiveDate, NaiveDateTime};

use crate::app::models::{HourlyAggregate, Measurement};


/// Timestamp on the given June 2025 day at hour:minute
pub fn ts(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// Measurement with the given power and fixed companion values
pub fn with_power(day: u32, hour: u32, minute: u32, power: f64) -> Measurement {
    Measurement::new(
        ts(day, hour, minute),
        Some(45.0),
        Some(0.9),
        Some(power),
        Some(28.0),
    )
}

/// Bare hourly row with the fields the daily roll-up reads
pub fn hourly_row(
    day: u32,
    hour: u32,
    avg_power: Option<f64>,
    count: usize,
) -> HourlyAggregate {
    HourlyAggregate {
        date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
        hour,
        avg_power_w: avg_power,
        std_power_w: None,
        count_measurements: count,
        avg_voltage_v: Some(45.0),
        avg_current_a: Some(0.9),
        avg_temperature_c: Some(28.0),
        condition: None,
    }
}
