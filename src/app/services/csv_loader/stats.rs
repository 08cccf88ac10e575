//! Load result and coercion statistics
//!
//! This module provides the loader's output types: the typed measurement
//! snapshot and the per-column coercion bookkeeping the validator needs to
//! raise type-conformity errors.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::app::models::Measurement;

/// Statistics gathered while coercing raw cells
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadStats {
    /// Total number of data rows loaded
    pub total_rows: usize,

    /// Per-column count of cells that were neither numeric nor a
    /// missing-value marker (loaded as null, flagged fatal by validation)
    pub non_numeric: HashMap<String, usize>,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one coercion failure for a column
    pub fn record_non_numeric(&mut self, column: &str) {
        *self.non_numeric.entry(column.to_string()).or_insert(0) += 1;
    }

    /// Coercion failures recorded for a column
    pub fn non_numeric_count(&self, column: &str) -> usize {
        self.non_numeric.get(column).copied().unwrap_or(0)
    }
}

/// A loaded, column-complete measurement set
///
/// Row order matches the input file; downstream stages read this snapshot
/// and never mutate it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    /// Measurements in input order
    pub measurements: Vec<Measurement>,

    /// Coercion statistics from the load
    pub stats: LoadStats,
}

impl Dataset {
    /// Create a dataset from parsed measurements and their load statistics
    pub fn new(measurements: Vec<Measurement>, stats: LoadStats) -> Self {
        Self {
            measurements,
            stats,
        }
    }

    /// Number of measurement rows
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Whether the dataset holds no rows
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// First and last calendar date covered, when any rows exist
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.measurements.iter().map(|m| m.date).min()?;
        let last = self.measurements.iter().map(|m| m.date).max()?;
        Some((first, last))
    }
}
