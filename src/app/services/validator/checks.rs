//! Individual validation checks
//!
//! Each check is a pure function over the dataset returning its findings;
//! the validator assembles them into the report. Checks that flag outlier
//! rows also return the offending row indices.

use tracing::debug;

use crate::app::models::Measurement;
use crate::app::services::csv_loader::Dataset;
use crate::config::{PanelSpecs, ValidRanges};
use crate::constants::{
    DATASET_COLUMN_COUNT, MAX_TIME_GAP_SECONDS, MISSING_DATA_ERROR_PCT, MISSING_DATA_WARNING_PCT,
    NUMERIC_COLUMNS, RATED_POWER_OUTLIER_FACTOR, VOC_OUTLIER_FACTOR,
};

/// Value of a numeric column by its header name
fn column_value(measurement: &Measurement, column: &str) -> Option<f64> {
    match column {
        "voltage_V" => measurement.voltage_v,
        "current_A" => measurement.current_a,
        "power_W" => measurement.power_w,
        "temperature_C" => measurement.temperature_c,
        _ => None,
    }
}

/// Type conformity: any column with non-numeric cells is a fatal error
pub fn check_data_types(dataset: &Dataset) -> Vec<String> {
    let mut errors = Vec::new();

    for &column in NUMERIC_COLUMNS {
        let count = dataset.stats.non_numeric_count(column);
        if count > 0 {
            errors.push(format!(
                "Column '{column}' contains non-numeric values ({count} cells)"
            ));
        }
    }

    errors
}

/// Range conformity: per-column bound violations are advisory outliers
pub fn check_value_ranges(
    measurements: &[Measurement],
    ranges: &ValidRanges,
) -> (Vec<String>, Vec<usize>) {
    let mut warnings = Vec::new();
    let mut flagged = Vec::new();

    for (column, (min_val, max_val)) in ranges.bounds() {
        let out_of_range: Vec<usize> = measurements
            .iter()
            .enumerate()
            .filter_map(|(i, m)| {
                column_value(m, column)
                    .filter(|v| *v < min_val || *v > max_val)
                    .map(|_| i)
            })
            .collect();

        if !out_of_range.is_empty() {
            warnings.push(format!(
                "{} rows have {} outside range [{}, {}]",
                out_of_range.len(),
                column,
                min_val,
                max_val
            ));
            flagged.extend(out_of_range);
        }
    }

    (warnings, flagged)
}

/// Temporal integrity: input-order monotonicity and gap size
pub fn check_temporal_integrity(measurements: &[Measurement]) -> Vec<String> {
    let mut warnings = Vec::new();

    let in_order = measurements
        .windows(2)
        .all(|pair| pair[0].timestamp <= pair[1].timestamp);
    if !in_order {
        warnings.push("Timestamps not in chronological order".to_string());
    }

    let mut sorted: Vec<_> = measurements.iter().map(|m| m.timestamp).collect();
    sorted.sort();

    if let Some(max_gap) = sorted.windows(2).map(|pair| pair[1] - pair[0]).max() {
        if max_gap.num_seconds() > MAX_TIME_GAP_SECONDS {
            warnings.push(format!(
                "Large time gap detected: {} minutes",
                max_gap.num_minutes()
            ));
        }
    }

    warnings
}

/// Physical outliers: readings beyond what the panel can produce
pub fn check_physical_outliers(
    measurements: &[Measurement],
    panel: &PanelSpecs,
) -> (Vec<String>, Vec<usize>) {
    let mut warnings = Vec::new();
    let mut flagged = Vec::new();

    let power_limit = RATED_POWER_OUTLIER_FACTOR * panel.rated_power_w;
    let high_power: Vec<usize> = measurements
        .iter()
        .enumerate()
        .filter_map(|(i, m)| m.power_w.filter(|p| *p > power_limit).map(|_| i))
        .collect();
    if !high_power.is_empty() {
        warnings.push(format!(
            "{} measurements exceed 2x rated power ({power_limit}W)",
            high_power.len()
        ));
        flagged.extend(high_power);
    }

    let voltage_limit = VOC_OUTLIER_FACTOR * panel.voc_v;
    let high_voltage: Vec<usize> = measurements
        .iter()
        .enumerate()
        .filter_map(|(i, m)| m.voltage_v.filter(|v| *v > voltage_limit).map(|_| i))
        .collect();
    if !high_voltage.is_empty() {
        warnings.push(format!(
            "{} measurements exceed 1.2x Voc ({voltage_limit:.1}V)",
            high_voltage.len()
        ));
        flagged.extend(high_voltage);
    }

    (warnings, flagged)
}

/// Missing data: average null fraction across all dataset columns
///
/// Timestamp and the derived date/hour columns are never null after a
/// successful load, so only the numeric columns contribute to the sum; the
/// average is still taken over all seven columns.
pub fn check_missing_data(measurements: &[Measurement]) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if measurements.is_empty() {
        return (errors, warnings);
    }

    let total = measurements.len() as f64;
    let null_cells: usize = measurements.iter().map(|m| m.null_count()).sum();
    let null_pct_sum = null_cells as f64 / total * 100.0;
    let null_pct = null_pct_sum / DATASET_COLUMN_COUNT as f64;

    debug!("Average null fraction: {:.2}%", null_pct);

    if null_pct > MISSING_DATA_ERROR_PCT {
        errors.push(format!("Data quality poor: {null_pct:.1}% missing values"));
    } else if null_pct > MISSING_DATA_WARNING_PCT {
        warnings.push(format!("Some missing data: {null_pct:.1}%"));
    }

    (errors, warnings)
}
