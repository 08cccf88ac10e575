//! Structured validation report
//!
//! Collects the findings of all validation checks into a single value the
//! caller can render, serialize, or branch on.

use serde::{Deserialize, Serialize};

/// Outcome of running all validation checks over a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True exactly when `errors` is empty
    pub is_valid: bool,

    /// Fatal findings, in check order
    pub errors: Vec<String>,

    /// Advisory findings, in check order
    pub warnings: Vec<String>,

    /// Number of rows in the validated dataset
    pub total_rows: usize,

    /// Number of distinct rows flagged by the range and physical-outlier
    /// checks
    pub invalid_rows: usize,

    /// `(1 - invalid_rows / total_rows) * 100`, in [0, 100]
    pub data_quality: f64,
}

impl ValidationReport {
    /// Build a report from collected findings
    pub fn new(
        errors: Vec<String>,
        warnings: Vec<String>,
        total_rows: usize,
        invalid_rows: usize,
    ) -> Self {
        let data_quality = if total_rows == 0 {
            100.0
        } else {
            (1.0 - invalid_rows as f64 / total_rows as f64) * 100.0
        };

        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            total_rows,
            invalid_rows,
            data_quality,
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} | {} rows, {} flagged, quality {:.1}% | {} errors, {} warnings",
            if self.is_valid { "VALID" } else { "INVALID" },
            self.total_rows,
            self.invalid_rows,
            self.data_quality,
            self.errors.len(),
            self.warnings.len()
        )
    }
}
