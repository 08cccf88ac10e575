//! CSV loader for solar panel measurement files
//!
//! This module turns a delimited measurement file into a typed,
//! column-complete [`Dataset`]: the five required columns plus the derived
//! `date` and `hour` grouping keys, row order preserved. Fatal load
//! conditions (missing file, oversized file, bad schema, unparseable
//! timestamps, too few rows) surface as distinct error kinds.
//!
//! ## Architecture
//!
//! - [`loader`] - Load orchestration and file handling
//! - [`field_parsers`] - Cell-level timestamp and numeric coercion
//! - [`stats`] - Load result and coercion statistics
//!
//! ## Usage
//!
//! ```rust,no_run
//! use solar_analyzer::app::services::csv_loader::CsvLoader;
//! use solar_analyzer::config::AnalysisConfig;
//!
//! # async fn example() -> solar_analyzer::Result<()> {
//! let loader = CsvLoader::new(AnalysisConfig::default());
//! let dataset = loader.load_file(std::path::Path::new("measurements.csv")).await?;
//!
//! println!("Loaded {} measurements", dataset.len());
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod loader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use loader::CsvLoader;
pub use stats::{Dataset, LoadStats};
