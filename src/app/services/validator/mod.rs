//! Measurement validation against plausibility bounds and data-quality rules
//!
//! Runs five independent, order-insensitive checks over a loaded dataset and
//! produces a pass/fail verdict plus a structured [`ValidationReport`]. All
//! checks always run; none short-circuits on failure. Fatal findings land in
//! `errors`, advisory findings in `warnings`, and validity is decided by the
//! error list alone.
//!
//! ## Architecture
//!
//! - [`checks`] - The individual validation checks as pure functions
//! - [`report`] - The structured validation report
//!
//! ## Usage
//!
//! ```rust
//! use solar_analyzer::app::services::validator::DataValidator;
//! use solar_analyzer::config::Config;
//!
//! # fn example(dataset: &solar_analyzer::app::services::csv_loader::Dataset) {
//! let validator = DataValidator::from_config(&Config::default());
//! let (is_valid, report) = validator.validate(dataset);
//!
//! println!("{}", report.summary());
//! # let _ = is_valid;
//! # }
//! ```

pub mod checks;
pub mod report;

#[cfg(test)]
pub mod tests;

use std::collections::HashSet;

use tracing::info;

use crate::app::services::csv_loader::Dataset;
use crate::config::{Config, PanelSpecs, ValidRanges};

pub use report::ValidationReport;

/// Validator for solar panel measurement data
///
/// Holds the panel specification and per-column ranges it checks against.
/// `validate` is a pure function of its input; repeated calls do not
/// accumulate state.
#[derive(Debug, Clone)]
pub struct DataValidator {
    panel: PanelSpecs,
    ranges: ValidRanges,
}

impl DataValidator {
    /// Create a validator with explicit panel specs and ranges
    pub fn new(panel: PanelSpecs, ranges: ValidRanges) -> Self {
        Self { panel, ranges }
    }

    /// Create a validator from the global configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.panel.clone(), config.ranges.clone())
    }

    /// Run all validation checks over a dataset
    ///
    /// Returns the verdict together with the full report. The verdict is
    /// true exactly when no fatal error was recorded; warnings never affect
    /// it. Rows flagged by the range and physical-outlier checks form the
    /// outlier set; a row breaking several rules is counted once.
    pub fn validate(&self, dataset: &Dataset) -> (bool, ValidationReport) {
        let measurements = &dataset.measurements;

        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut flagged: HashSet<usize> = HashSet::new();

        errors.extend(checks::check_data_types(dataset));

        let (range_warnings, range_rows) =
            checks::check_value_ranges(measurements, &self.ranges);
        warnings.extend(range_warnings);
        flagged.extend(range_rows);

        warnings.extend(checks::check_temporal_integrity(measurements));

        let (outlier_warnings, outlier_rows) =
            checks::check_physical_outliers(measurements, &self.panel);
        warnings.extend(outlier_warnings);
        flagged.extend(outlier_rows);

        let (missing_errors, missing_warnings) = checks::check_missing_data(measurements);
        errors.extend(missing_errors);
        warnings.extend(missing_warnings);

        let report =
            ValidationReport::new(errors, warnings, measurements.len(), flagged.len());
        info!("Validation complete: {}", report.summary());

        (report.is_valid, report)
    }
}
