//! Command implementations for the solar analyzer CLI
//!
//! This module contains the command execution logic, progress reporting,
//! and report rendering for the CLI interface.

use crate::app::services::aggregator::{
    daily_summary, hourly_summary, merge_conditions, performance_ratio, PerformanceRatio,
};
use crate::app::services::classifier::{summarize, ClassificationSummary, CloudClassifier};
use crate::app::services::csv_loader::CsvLoader;
use crate::app::services::validator::{DataValidator, ValidationReport};
use crate::app::models::DailyAggregate;
use crate::cli::args::{AnalyzeArgs, Commands, OutputFormat, ValidateArgs};
use crate::config::{Config, PanelSpecs};
use crate::{Error, Result};
use colored::Colorize;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Full analysis results for reporting
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Input file that was analyzed
    pub file: String,
    /// Number of data rows loaded
    pub total_rows: usize,
    /// First and last measurement dates, when any rows exist
    pub date_range: Option<(String, String)>,
    /// Effective clear-sky threshold after clamping
    pub threshold: f64,
    /// Data quality report from the validation stage
    pub validation: ValidationReport,
    /// Sky-condition label distribution
    pub classification: ClassificationSummary,
    /// Performance ratios against the rated output
    pub performance: PerformanceRatio,
    /// Daily production roll-up
    pub daily: Vec<DailyAggregate>,
    /// Wall-clock processing time in seconds
    pub processing_time_seconds: f64,
}

/// Validation-only results for reporting
#[derive(Debug, Clone, Serialize)]
pub struct ValidationOutcome {
    /// Input file that was validated
    pub file: String,
    /// Number of data rows loaded
    pub total_rows: usize,
    /// Data quality report
    pub report: ValidationReport,
}

/// Dispatch a parsed subcommand
pub async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Analyze(args) => run_analyze(args).await,
        Commands::Validate(args) => run_validate(args).await,
    }
}

/// Run the full pipeline: load, validate, aggregate, classify and report
async fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting solar analysis");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = build_config(
        args.threshold,
        args.min_rows,
        args.max_file_size_mb,
        args.rated_power_w,
        args.voc_v,
    );
    debug!("Effective configuration: {:?}", config);

    let progress_bar = if args.show_progress() {
        let pb = ProgressBar::new(4);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message("Loading measurements...");
        Some(pb)
    } else {
        None
    };

    let loader = CsvLoader::new(config.analysis.clone());
    let dataset = loader.load_file(&args.input).await?;
    info!("Loaded {} measurement rows", dataset.len());

    if let Some(pb) = &progress_bar {
        pb.set_position(1);
        pb.set_message("Validating data quality...");
    }

    let validator = DataValidator::from_config(&config);
    let (is_valid, report) = validator.validate(&dataset);
    for warning in &report.warnings {
        warn!("{}", warning);
    }

    if !is_valid {
        if let Some(pb) = &progress_bar {
            pb.abandon_with_message("Validation failed");
        }
        for error in &report.errors {
            eprintln!("{} {}", "error:".red().bold(), error);
        }
        return Err(Error::data_validation(format!(
            "{} failed {} validation check(s); rerun with the validate command for a full report",
            args.input.display(),
            report.errors.len()
        )));
    }

    if let Some(pb) = &progress_bar {
        pb.set_position(2);
        pb.set_message("Classifying sky conditions...");
    }

    let classifier = CloudClassifier::new(config.effective_threshold());
    let classified = classifier.classify(&dataset.measurements);
    let classification = summarize(&classified);

    if let Some(pb) = &progress_bar {
        pb.set_position(3);
        pb.set_message("Aggregating statistics...");
    }

    let hourly = hourly_summary(&dataset.measurements);
    let hourly = merge_conditions(hourly, &classified);
    let daily = daily_summary(&hourly);
    let performance = performance_ratio(&classified, &config.panel);

    if let Some(pb) = &progress_bar {
        pb.set_position(4);
        pb.finish_with_message("Analysis complete");
    }

    let analysis = AnalysisReport {
        file: args.input.display().to_string(),
        total_rows: dataset.len(),
        date_range: dataset
            .date_range()
            .map(|(first, last)| (first.to_string(), last.to_string())),
        threshold: classifier.threshold(),
        validation: report,
        classification,
        performance,
        daily,
        processing_time_seconds: start_time.elapsed().as_secs_f64(),
    };

    match args.output_format {
        OutputFormat::Human => render_analysis_human(&analysis, start_time),
        OutputFormat::Json => render_json(&analysis),
        OutputFormat::Csv => render_analysis_csv(&analysis),
    }
}

/// Load a file and report data quality without running the analysis
async fn run_validate(args: ValidateArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Validating {}", args.input.display());
    args.validate()?;

    let config = build_config(
        crate::constants::DEFAULT_CLEAR_SKY_THRESHOLD,
        args.min_rows,
        args.max_file_size_mb,
        args.rated_power_w,
        args.voc_v,
    );

    let loader = CsvLoader::new(config.analysis.clone());
    let dataset = loader.load_file(&args.input).await?;

    let validator = DataValidator::from_config(&config);
    let (is_valid, report) = validator.validate(&dataset);

    let outcome = ValidationOutcome {
        file: args.input.display().to_string(),
        total_rows: dataset.len(),
        report,
    };

    match args.output_format {
        OutputFormat::Human => render_validation_human(&outcome)?,
        OutputFormat::Json => render_json(&outcome)?,
        OutputFormat::Csv => render_validation_csv(&outcome)?,
    }

    if is_valid {
        Ok(())
    } else {
        Err(Error::data_validation(format!(
            "{} failed {} validation check(s)",
            args.input.display(),
            outcome.report.errors.len()
        )))
    }
}

/// Set up structured logging based on CLI arguments
fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("solar_analyzer={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Build the run configuration from CLI overrides
fn build_config(
    threshold: f64,
    min_rows: usize,
    max_file_size_mb: usize,
    rated_power_w: Option<f64>,
    voc_v: Option<f64>,
) -> Config {
    let mut panel = PanelSpecs::default();
    if let Some(rated_power) = rated_power_w {
        panel = panel.with_rated_power(rated_power);
    }
    if let Some(voc) = voc_v {
        panel = panel.with_voc(voc);
    }

    Config::default()
        .with_threshold(threshold)
        .with_min_rows(min_rows)
        .with_max_file_size_mb(max_file_size_mb)
        .with_panel(panel)
}

/// Render the analysis report for humans
fn render_analysis_human(analysis: &AnalysisReport, start_time: Instant) -> Result<()> {
    let duration = HumanDuration(start_time.elapsed());

    println!();
    println!("{}", "Solar Analysis Report".bold().underline());
    println!("File: {}", analysis.file);
    if let Some((first, last)) = &analysis.date_range {
        println!("Period: {} to {}", first, last);
    }
    println!("Rows: {}", analysis.total_rows);
    println!(
        "Data quality: {:.1}% ({} flagged rows, {} warnings)",
        analysis.validation.data_quality,
        analysis.validation.invalid_rows,
        analysis.validation.warnings.len()
    );

    println!();
    println!(
        "{} (threshold {:.2})",
        "Sky Conditions".bold(),
        analysis.threshold
    );
    let summary = &analysis.classification;
    println!(
        "   {} {:>6} rows ({:>5.1}%)",
        "CLEAR   ".green().bold(),
        summary.clear_count,
        summary.clear_pct
    );
    println!(
        "   {} {:>6} rows ({:>5.1}%)",
        "MARGINAL".yellow().bold(),
        summary.marginal_count,
        summary.marginal_pct
    );
    println!(
        "   {} {:>6} rows ({:>5.1}%)",
        "CLOUDY  ".blue().bold(),
        summary.cloudy_count,
        summary.cloudy_pct
    );

    println!();
    println!("{}", "Daily Production".bold());
    println!(
        "   {:<12} {:>10} {:>10} {:>8} {:>10}",
        "date", "peak (W)", "avg (W)", "samples", "energy (Wh)"
    );
    for day in &analysis.daily {
        println!(
            "   {:<12} {:>10} {:>10} {:>8} {:>10}",
            day.date,
            format_power(day.peak_power_w),
            format_power(day.avg_power_w),
            day.hours_measured,
            format_power(day.energy_wh)
        );
    }

    println!();
    println!(
        "Performance ratio: {:.2} overall, {:.2} under clear sky",
        analysis.performance.pr_all, analysis.performance.pr_clear
    );
    println!("Completed in {}", duration);
    println!();

    Ok(())
}

/// Render the validation report for humans
fn render_validation_human(outcome: &ValidationOutcome) -> Result<()> {
    let report = &outcome.report;

    println!();
    println!("{}", "Validation Report".bold().underline());
    println!("File: {}", outcome.file);
    println!("Rows: {}", outcome.total_rows);
    println!(
        "Data quality: {:.1}% ({} flagged rows)",
        report.data_quality, report.invalid_rows
    );

    if report.errors.is_empty() && report.warnings.is_empty() {
        println!("{}", "All checks passed".green().bold());
        println!();
        return Ok(());
    }

    for error in &report.errors {
        println!("   {} {}", "error:".red().bold(), error);
    }
    for warning in &report.warnings {
        println!("   {} {}", "warning:".yellow().bold(), warning);
    }

    println!();
    if report.is_valid {
        println!("{}", "Dataset is usable (warnings only)".green());
    } else {
        println!("{}", "Dataset failed validation".red().bold());
    }
    println!();

    Ok(())
}

/// Render any serializable report as pretty JSON
fn render_json<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Render the analysis report as CSV (one row per day)
fn render_analysis_csv(analysis: &AnalysisReport) -> Result<()> {
    println!("date,peak_power_w,avg_power_w,hours_measured,temp_avg_c,energy_wh");
    for day in &analysis.daily {
        println!(
            "{},{},{},{},{},{}",
            day.date,
            format_csv_cell(day.peak_power_w),
            format_csv_cell(day.avg_power_w),
            day.hours_measured,
            format_csv_cell(day.temp_avg_c),
            format_csv_cell(day.energy_wh)
        );
    }
    Ok(())
}

/// Render the validation report as metric,value CSV lines
fn render_validation_csv(outcome: &ValidationOutcome) -> Result<()> {
    let report = &outcome.report;
    println!("metric,value");
    println!("total_rows,{}", report.total_rows);
    println!("invalid_rows,{}", report.invalid_rows);
    println!("data_quality,{:.2}", report.data_quality);
    println!("errors,{}", report.errors.len());
    println!("warnings,{}", report.warnings.len());
    println!("is_valid,{}", report.is_valid);
    Ok(())
}

fn format_power(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    }
}

fn format_csv_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.3}", v),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_MAX_FILE_SIZE_MB, DEFAULT_MIN_ROWS};

    #[test]
    fn test_build_config_defaults() {
        let config = build_config(0.70, DEFAULT_MIN_ROWS, DEFAULT_MAX_FILE_SIZE_MB, None, None);

        assert_eq!(config.analysis.clear_sky_threshold, 0.70);
        assert_eq!(config.panel.rated_power_w, 48.0);
        assert_eq!(config.panel.voc_v, 58.9);
    }

    #[test]
    fn test_build_config_panel_overrides() {
        let config = build_config(0.80, 50, 10, Some(100.0), Some(42.0));

        assert_eq!(config.analysis.clear_sky_threshold, 0.80);
        assert_eq!(config.analysis.min_rows, 50);
        assert_eq!(config.analysis.max_file_size_mb, 10);
        assert_eq!(config.panel.rated_power_w, 100.0);
        assert_eq!(config.panel.voc_v, 42.0);
        // Remaining specs keep their datasheet values
        assert_eq!(config.panel.reference_temperature_celsius, 25.0);
    }

    #[test]
    fn test_build_config_threshold_clamped_on_use() {
        let config = build_config(2.0, DEFAULT_MIN_ROWS, DEFAULT_MAX_FILE_SIZE_MB, None, None);
        assert_eq!(config.effective_threshold(), 0.9);
    }

    #[test]
    fn test_render_json_propagates_result() {
        let outcome = ValidationOutcome {
            file: "measurements.csv".to_string(),
            total_rows: 10,
            report: crate::app::services::validator::ValidationReport::new(
                Vec::new(),
                vec!["Some missing data: 6.0%".to_string()],
                10,
                1,
            ),
        };

        assert!(render_json(&outcome).is_ok());
    }

    #[test]
    fn test_format_power() {
        assert_eq!(format_power(Some(41.26)), "41.3");
        assert_eq!(format_power(None), "-");
    }

    #[test]
    fn test_format_csv_cell_empty_for_null() {
        assert_eq!(format_csv_cell(Some(1.5)), "1.500");
        assert_eq!(format_csv_cell(None), "");
    }
}
