//! Core data structures for the measurement analysis pipeline.
//!
//! Defines the typed measurement record, the sky-condition label, and the
//! derived hourly/daily aggregate rows produced by the pipeline stages.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// One row of input: an electrical measurement at a point in time
///
/// `date` and `hour` are pure functions of `timestamp`, derived once at
/// construction for grouping. Numeric fields are `None` when the source
/// cell was empty or carried a missing-value marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub timestamp: NaiveDateTime,
    pub voltage_v: Option<f64>,
    pub current_a: Option<f64>,
    pub power_w: Option<f64>,
    pub temperature_c: Option<f64>,

    /// Calendar date of `timestamp`
    pub date: NaiveDate,

    /// Hour of day of `timestamp`, 0-23
    pub hour: u32,
}

impl Measurement {
    /// Create a measurement, deriving the `date` and `hour` grouping keys
    pub fn new(
        timestamp: NaiveDateTime,
        voltage_v: Option<f64>,
        current_a: Option<f64>,
        power_w: Option<f64>,
        temperature_c: Option<f64>,
    ) -> Self {
        Self {
            timestamp,
            voltage_v,
            current_a,
            power_w,
            temperature_c,
            date: timestamp.date(),
            hour: timestamp.hour(),
        }
    }

    /// Count of null cells among the four numeric columns
    pub fn null_count(&self) -> usize {
        [
            self.voltage_v,
            self.current_a,
            self.power_w,
            self.temperature_c,
        ]
        .iter()
        .filter(|v| v.is_none())
        .count()
    }
}

/// Three-level sky-condition label derived from the power ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkyCondition {
    Clear,
    Marginal,
    Cloudy,
}

impl SkyCondition {
    /// Canonical uppercase label used in reports and exports
    pub fn as_str(&self) -> &'static str {
        match self {
            SkyCondition::Clear => "CLEAR",
            SkyCondition::Marginal => "MARGINAL",
            SkyCondition::Cloudy => "CLOUDY",
        }
    }
}

impl std::fmt::Display for SkyCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A measurement joined to its hour-of-day baseline and classified
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedMeasurement {
    /// The underlying measurement (owned snapshot, input left untouched)
    pub measurement: Measurement,

    /// Median power for this measurement's hour of day across all dates;
    /// `None` when no power sample exists for that hour
    pub median_power_w: Option<f64>,

    /// Actual power over the (epsilon-padded) hourly median
    pub power_ratio: f64,

    /// Assigned sky-condition label
    pub condition: SkyCondition,

    /// Distance-to-threshold heuristic in [0, 1]; not a probability
    pub confidence: f64,
}

/// Statistics for one (date, hour) group of measurements
///
/// Averages skip null cells; `std_power_w` is the sample standard
/// deviation and is `None` for groups with fewer than two power samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyAggregate {
    pub date: NaiveDate,
    pub hour: u32,
    pub avg_power_w: Option<f64>,
    pub std_power_w: Option<f64>,

    /// Number of non-null power samples in the group
    pub count_measurements: usize,

    pub avg_voltage_v: Option<f64>,
    pub avg_current_a: Option<f64>,
    pub avg_temperature_c: Option<f64>,

    /// First classification label among the group's raw rows, when merged
    pub condition: Option<SkyCondition>,
}

/// Daily roll-up of hourly aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,

    /// Maximum of the day's hourly average powers
    pub peak_power_w: Option<f64>,

    /// Mean of the day's hourly average powers (mean of means)
    pub avg_power_w: Option<f64>,

    /// Sum of the day's hourly sample counts
    pub hours_measured: usize,

    pub temp_avg_c: Option<f64>,

    /// `avg_power_w * hours_measured`; an approximation, not a true
    /// time integral of the power curve
    pub energy_wh: Option<f64>,
}
