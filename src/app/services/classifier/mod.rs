//! Sky-condition classification from the power-ratio heuristic
//!
//! Classifies each measurement as CLEAR, MARGINAL, or CLOUDY by comparing
//! its power against a baseline: the median power observed at the same hour
//! of day across all dates. The baseline pass must complete before any row
//! can be classified, so classification is two-phase and cannot be
//! pipelined row by row.
//!
//! ## Logic
//!
//! 1. Compute the median power for each hour of day (all dates collapsed)
//! 2. For each measurement, `power_ratio = power / (median + 1e-6)`
//! 3. `power_ratio >= threshold` -> CLEAR
//! 4. `power_ratio >= 0.5 * threshold` -> MARGINAL
//! 5. Otherwise -> CLOUDY
//!
//! ## Usage
//!
//! ```rust
//! use solar_analyzer::app::services::classifier::{CloudClassifier, summarize};
//!
//! # fn example(measurements: &[solar_analyzer::Measurement]) {
//! let classifier = CloudClassifier::new(0.70);
//! let classified = classifier.classify(measurements);
//! let summary = summarize(&classified);
//!
//! println!("{} clear of {}", summary.clear_count, summary.total_rows());
//! # }
//! ```

pub mod summary;

#[cfg(test)]
pub mod tests;

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::app::models::{ClassifiedMeasurement, Measurement, SkyCondition};
use crate::constants::{
    CLEAR_SKY_THRESHOLD_MAX, CLEAR_SKY_THRESHOLD_MIN, MARGINAL_THRESHOLD_FACTOR, RATIO_EPSILON,
};

pub use summary::{ClassificationSummary, summarize};

use super::aggregator::stats;

/// Power-ratio sky-condition classifier
///
/// Holds only its threshold; every call is a pure function of its input,
/// so classifying the same measurements twice yields identical output.
#[derive(Debug, Clone, Copy)]
pub struct CloudClassifier {
    threshold: f64,
}

impl CloudClassifier {
    /// Create a classifier, silently clamping the threshold to [0.5, 0.9]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(CLEAR_SKY_THRESHOLD_MIN, CLEAR_SKY_THRESHOLD_MAX),
        }
    }

    /// The effective (clamped) classification threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Median power per hour of day, collapsed across all dates
    ///
    /// This is the expected power for each hour under typical conditions.
    /// Null power cells are skipped; an hour with no power samples at all
    /// has no entry.
    pub fn hourly_medians(&self, measurements: &[Measurement]) -> BTreeMap<u32, f64> {
        let mut by_hour: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
        for m in measurements {
            if let Some(p) = m.power_w {
                by_hour.entry(m.hour).or_default().push(p);
            }
        }

        let medians: BTreeMap<u32, f64> = by_hour
            .into_iter()
            .filter_map(|(hour, powers)| stats::median(&powers).map(|md| (hour, md)))
            .collect();

        debug!("Computed hourly medians for {} hours", medians.len());
        medians
    }

    /// Classify every measurement against its hour-of-day baseline
    ///
    /// Left join on the hour: a row whose power is null, or whose hour has
    /// no median, gets `power_ratio = 0` and classifies CLOUDY. The
    /// confidence score is the distance-to-threshold heuristic
    /// `clip(1 - |ratio - t| / max(t, 1 - t), 0, 1)`; it is symmetric
    /// around the threshold and is not a probability.
    pub fn classify(&self, measurements: &[Measurement]) -> Vec<ClassifiedMeasurement> {
        let medians = self.hourly_medians(measurements);

        let classified: Vec<ClassifiedMeasurement> = measurements
            .iter()
            .map(|m| {
                let median_power_w = medians.get(&m.hour).copied();
                let power_ratio = match (m.power_w, median_power_w) {
                    (Some(power), Some(median)) => power / (median + RATIO_EPSILON),
                    _ => 0.0,
                };

                let condition = if power_ratio >= self.threshold {
                    SkyCondition::Clear
                } else if power_ratio >= MARGINAL_THRESHOLD_FACTOR * self.threshold {
                    SkyCondition::Marginal
                } else {
                    SkyCondition::Cloudy
                };

                let spread = self.threshold.max(1.0 - self.threshold);
                let confidence =
                    (1.0 - (power_ratio - self.threshold).abs() / spread).clamp(0.0, 1.0);

                ClassifiedMeasurement {
                    measurement: m.clone(),
                    median_power_w,
                    power_ratio,
                    condition,
                    confidence,
                }
            })
            .collect();

        info!(
            "Classified {} measurements at threshold {:.2}",
            classified.len(),
            self.threshold
        );
        classified
    }
}
