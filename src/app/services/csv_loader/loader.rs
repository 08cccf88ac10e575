//! Load orchestration for measurement CSV files
//!
//! Handles file-level checks (existence, size ceiling), CSV parsing, schema
//! enforcement, and row-by-row cell coercion into typed measurements.

use std::path::Path;

use tracing::{debug, info};

use super::field_parsers::{NumericCell, get_field, parse_numeric, parse_timestamp};
use super::stats::{Dataset, LoadStats};
use crate::app::models::Measurement;
use crate::config::AnalysisConfig;
use crate::constants::{NUMERIC_COLUMNS, REQUIRED_COLUMNS};
use crate::{Error, Result};

/// Loader for solar panel measurement CSV files
///
/// Expected columns: `timestamp` (YYYY-MM-DD HH:MM:SS or an ISO variant),
/// `voltage_V`, `current_A`, `power_W`, `temperature_C`. Extra columns are
/// dropped; any unparseable timestamp fails the whole load.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    config: AnalysisConfig,
}

impl CsvLoader {
    /// Create a loader with the given analysis limits
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Load a measurement file from disk
    pub async fn load_file(&self, file_path: &Path) -> Result<Dataset> {
        info!("Loading measurement file: {}", file_path.display());

        if !file_path.exists() {
            return Err(Error::file_not_found(file_path.display().to_string()));
        }

        let metadata = tokio::fs::metadata(file_path)
            .await
            .map_err(|e| Error::io(format!("Failed to stat {}", file_path.display()), e))?;
        let size_mb = metadata.len() as f64 / (1024.0 * 1024.0);
        if size_mb > self.config.max_file_size_mb as f64 {
            return Err(Error::file_too_large(
                file_path.display().to_string(),
                size_mb,
                self.config.max_file_size_mb,
            ));
        }

        let content = tokio::fs::read_to_string(file_path)
            .await
            .map_err(|e| Error::io(format!("Failed to read {}", file_path.display()), e))?;

        self.parse_content(&content, &file_path.display().to_string())
    }

    /// Parse CSV content held in memory (backs [`Self::load_file`] and tests)
    pub fn parse_str(&self, content: &str) -> Result<Dataset> {
        self.parse_content(content, "inline")
    }

    fn parse_content(&self, content: &str, source_name: &str) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| {
                Error::csv_parsing(source_name, "Failed to read CSV header row", Some(e))
            })?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut records = Vec::new();
        for (i, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                Error::csv_parsing(
                    source_name,
                    format!("Malformed CSV at data row {}", i + 1),
                    Some(e),
                )
            })?;
            records.push(record);
        }

        if records.len() < self.config.min_rows {
            return Err(Error::dataset_too_small(records.len(), self.config.min_rows));
        }

        // Resolve required column positions; report every absent name at once
        let mut indices = Vec::with_capacity(REQUIRED_COLUMNS.len());
        let mut missing = Vec::new();
        for &column in REQUIRED_COLUMNS {
            match headers.iter().position(|h| h == column) {
                Some(idx) => indices.push(idx),
                None => missing.push(column),
            }
        }
        if !missing.is_empty() {
            return Err(Error::missing_columns(&missing));
        }
        let ts_idx = indices[0];

        debug!(
            "Header resolved: {} columns, {} required, {} dropped",
            headers.len(),
            REQUIRED_COLUMNS.len(),
            headers.len() - REQUIRED_COLUMNS.len()
        );

        let mut stats = LoadStats::new();
        let mut measurements = Vec::with_capacity(records.len());

        for (i, record) in records.iter().enumerate() {
            let raw_ts = get_field(record, ts_idx);
            let timestamp = parse_timestamp(raw_ts)
                .ok_or_else(|| Error::timestamp_parsing(i + 1, raw_ts))?;

            let mut values = [None; 4];
            for (slot, (&column, &idx)) in values
                .iter_mut()
                .zip(NUMERIC_COLUMNS.iter().zip(indices[1..].iter()))
            {
                match parse_numeric(get_field(record, idx)) {
                    NumericCell::Value(v) => *slot = Some(v),
                    NumericCell::Missing => {}
                    NumericCell::Invalid => stats.record_non_numeric(column),
                }
            }

            measurements.push(Measurement::new(
                timestamp, values[0], values[1], values[2], values[3],
            ));
        }

        stats.total_rows = measurements.len();
        info!(
            "Loaded {} measurements from {}",
            stats.total_rows, source_name
        );

        Ok(Dataset::new(measurements, stats))
    }
}
