//! Command-line argument definitions for the solar analyzer
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::constants::{
    CLEAR_SKY_THRESHOLD_MAX, CLEAR_SKY_THRESHOLD_MIN, DEFAULT_CLEAR_SKY_THRESHOLD,
    DEFAULT_MAX_FILE_SIZE_MB, DEFAULT_MIN_ROWS,
};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the solar panel data analyzer
///
/// Analyzes time-series measurements exported from a solar panel monitoring
/// setup: validates data quality, aggregates hourly and daily statistics,
/// and classifies sky conditions from relative power output.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "solar-analyzer",
    version,
    about = "Analyze solar panel time-series data: validation, aggregation and sky classification",
    long_about = "Processes CSV exports of solar panel measurements (voltage, current, power, \
                  temperature). Validates the dataset against panel electrical limits, computes \
                  hourly and daily production statistics, and classifies each measurement as \
                  CLEAR, MARGINAL or CLOUDY by comparing power output against the hourly median \
                  baseline across all days in the dataset."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the solar analyzer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the full analysis pipeline: validate, aggregate and classify (default command)
    Analyze(AnalyzeArgs),
    /// Validate a CSV file and report data quality without analyzing it
    Validate(ValidateArgs),
}

/// Arguments for the analyze command (full pipeline)
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// Input CSV file with solar panel measurements
    ///
    /// Must contain columns: timestamp, voltage_V, current_A, power_W,
    /// temperature_C. Extra columns are ignored.
    #[arg(value_name = "FILE", help = "Input CSV file with measurements")]
    pub input: PathBuf,

    /// Clear-sky classification threshold
    ///
    /// Power ratios at or above this fraction of the hourly median baseline
    /// are labelled CLEAR. Clamped to the supported range at runtime.
    #[arg(
        short = 't',
        long = "threshold",
        value_name = "RATIO",
        default_value_t = DEFAULT_CLEAR_SKY_THRESHOLD,
        help = "Clear-sky threshold as a fraction of the hourly median"
    )]
    pub threshold: f64,

    /// Minimum number of data rows required in the input file
    #[arg(
        long = "min-rows",
        value_name = "COUNT",
        default_value_t = DEFAULT_MIN_ROWS,
        help = "Minimum number of data rows required"
    )]
    pub min_rows: usize,

    /// Maximum accepted input file size in megabytes
    #[arg(
        long = "max-file-size-mb",
        value_name = "MB",
        default_value_t = DEFAULT_MAX_FILE_SIZE_MB,
        help = "Maximum input file size in MB"
    )]
    pub max_file_size_mb: usize,

    /// Rated power of the panel in watts
    ///
    /// Used for outlier detection and the performance ratio. Defaults to
    /// the reference panel (48 W).
    #[arg(
        long = "rated-power",
        value_name = "WATTS",
        help = "Panel rated power in watts (default: 48)"
    )]
    pub rated_power_w: Option<f64>,

    /// Open-circuit voltage of the panel in volts
    #[arg(
        long = "voc",
        value_name = "VOLTS",
        help = "Panel open-circuit voltage in volts (default: 58.9)"
    )]
    pub voc_v: Option<f64>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for machine-readable results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the validate command (quality report only)
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Input CSV file with solar panel measurements
    #[arg(value_name = "FILE", help = "Input CSV file with measurements")]
    pub input: PathBuf,

    /// Minimum number of data rows required in the input file
    #[arg(
        long = "min-rows",
        value_name = "COUNT",
        default_value_t = DEFAULT_MIN_ROWS,
        help = "Minimum number of data rows required"
    )]
    pub min_rows: usize,

    /// Maximum accepted input file size in megabytes
    #[arg(
        long = "max-file-size-mb",
        value_name = "MB",
        default_value_t = DEFAULT_MAX_FILE_SIZE_MB,
        help = "Maximum input file size in MB"
    )]
    pub max_file_size_mb: usize,

    /// Rated power of the panel in watts
    #[arg(
        long = "rated-power",
        value_name = "WATTS",
        help = "Panel rated power in watts (default: 48)"
    )]
    pub rated_power_w: Option<f64>,

    /// Open-circuit voltage of the panel in volts
    #[arg(
        long = "voc",
        value_name = "VOLTS",
        help = "Panel open-circuit voltage in volts (default: 58.9)"
    )]
    pub voc_v: Option<f64>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the validation report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the validation report"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl AnalyzeArgs {
    /// Validate the analyze command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.input)?;
        validate_sizing(self.min_rows, self.max_file_size_mb)?;
        validate_panel_overrides(self.rated_power_w, self.voc_v)?;

        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(Error::configuration(format!(
                "Clear-sky threshold must be a positive number (clamped to [{}, {}]), got {}",
                CLEAR_SKY_THRESHOLD_MIN, CLEAR_SKY_THRESHOLD_MAX, self.threshold
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }
}

impl ValidateArgs {
    /// Validate the validate command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(&self.input)?;
        validate_sizing(self.min_rows, self.max_file_size_mb)?;
        validate_panel_overrides(self.rated_power_w, self.voc_v)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }
}

fn log_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn validate_input_file(input: &std::path::Path) -> Result<()> {
    if !input.exists() {
        return Err(Error::configuration(format!(
            "Input file does not exist: {}",
            input.display()
        )));
    }

    if input.is_dir() {
        return Err(Error::configuration(format!(
            "Input path is a directory, expected a CSV file: {}",
            input.display()
        )));
    }

    Ok(())
}

fn validate_sizing(min_rows: usize, max_file_size_mb: usize) -> Result<()> {
    if min_rows == 0 {
        return Err(Error::configuration(
            "Minimum row count must be greater than 0".to_string(),
        ));
    }

    if max_file_size_mb == 0 {
        return Err(Error::configuration(
            "Maximum file size must be greater than 0 MB".to_string(),
        ));
    }

    Ok(())
}

fn validate_panel_overrides(rated_power_w: Option<f64>, voc_v: Option<f64>) -> Result<()> {
    if let Some(rated_power) = rated_power_w {
        if !rated_power.is_finite() || rated_power <= 0.0 {
            return Err(Error::configuration(format!(
                "Rated power must be a positive number of watts, got {rated_power}"
            )));
        }
    }

    if let Some(voc) = voc_v {
        if !voc.is_finite() || voc <= 0.0 {
            return Err(Error::configuration(format!(
                "Open-circuit voltage must be a positive number of volts, got {voc}"
            )));
        }
    }

    Ok(())
}
