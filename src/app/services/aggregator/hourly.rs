//! Hourly aggregation: grouping by (date, hour)
//!
//! Groups measurements by their exact (date, hour) key and computes
//! per-group statistics. Output rows come back in ascending key order,
//! date first then hour. This key is deliberately distinct from the
//! classifier's hour-of-day baseline, which collapses across dates.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use tracing::info;

use super::stats;
use crate::app::models::{ClassifiedMeasurement, HourlyAggregate, Measurement, SkyCondition};

/// Reduce raw measurements to one aggregate row per distinct (date, hour)
///
/// Column averages skip null cells; `std_power_w` is the sample standard
/// deviation of power and is `None` for groups with fewer than two power
/// samples; `count_measurements` counts the group's non-null power samples.
pub fn hourly_summary(measurements: &[Measurement]) -> Vec<HourlyAggregate> {
    let mut groups: BTreeMap<(NaiveDate, u32), Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        groups.entry((m.date, m.hour)).or_default().push(m);
    }

    let hourly: Vec<HourlyAggregate> = groups
        .into_iter()
        .map(|((date, hour), rows)| {
            let powers: Vec<f64> = rows.iter().filter_map(|m| m.power_w).collect();
            let voltages: Vec<f64> = rows.iter().filter_map(|m| m.voltage_v).collect();
            let currents: Vec<f64> = rows.iter().filter_map(|m| m.current_a).collect();
            let temperatures: Vec<f64> = rows.iter().filter_map(|m| m.temperature_c).collect();

            HourlyAggregate {
                date,
                hour,
                avg_power_w: stats::mean(&powers),
                std_power_w: stats::sample_std(&powers),
                count_measurements: powers.len(),
                avg_voltage_v: stats::mean(&voltages),
                avg_current_a: stats::mean(&currents),
                avg_temperature_c: stats::mean(&temperatures),
                condition: None,
            }
        })
        .collect();

    info!("Computed {} hourly summaries", hourly.len());
    hourly
}

/// Merge classification labels into hourly rows
///
/// Left merge: each hourly row receives the first label (input order)
/// among its (date, hour) group's classified measurements; rows without
/// a matching classified measurement keep `None`.
pub fn merge_conditions(
    hourly: Vec<HourlyAggregate>,
    classified: &[ClassifiedMeasurement],
) -> Vec<HourlyAggregate> {
    let mut first_label: HashMap<(NaiveDate, u32), SkyCondition> = HashMap::new();
    for c in classified {
        first_label
            .entry((c.measurement.date, c.measurement.hour))
            .or_insert(c.condition);
    }

    hourly
        .into_iter()
        .map(|mut row| {
            row.condition = first_label.get(&(row.date, row.hour)).copied();
            row
        })
        .collect()
}
