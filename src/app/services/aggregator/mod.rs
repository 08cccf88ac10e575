//! Aggregation of raw measurements into hourly and daily summaries
//!
//! Every function here is a pure reduction from one snapshot to a new one:
//! raw measurements group into per-(date, hour) statistics, hourly rows
//! roll up into daily rows, and classified measurements contribute optional
//! sky-condition labels. Empty input produces empty output; no function
//! fails on well-typed data.
//!
//! ## Architecture
//!
//! - [`hourly`] - Grouping by (date, hour) and per-group statistics
//! - [`daily`] - Roll-up of hourly rows by date
//! - [`performance`] - Temperature correction and performance ratio
//! - [`stats`] - Null-skipping descriptive statistics helpers

pub mod daily;
pub mod hourly;
pub mod performance;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export the aggregation entry points
pub use daily::daily_summary;
pub use hourly::{hourly_summary, merge_conditions};
pub use performance::{PerformanceRatio, performance_ratio, temperature_corrected_power};
