//! Daily roll-up of hourly aggregates

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::info;

use super::stats;
use crate::app::models::{DailyAggregate, HourlyAggregate};

/// Reduce hourly rows to one aggregate row per date, ascending
///
/// `avg_power_w` is the unweighted mean of the day's hourly means and
/// `energy_wh` multiplies it by the day's sample count. Both reproduce the
/// reference behavior: the energy figure approximates the daily integral
/// and is not re-weighted by per-hour sample counts.
pub fn daily_summary(hourly: &[HourlyAggregate]) -> Vec<DailyAggregate> {
    let mut groups: BTreeMap<NaiveDate, Vec<&HourlyAggregate>> = BTreeMap::new();
    for row in hourly {
        groups.entry(row.date).or_default().push(row);
    }

    let daily: Vec<DailyAggregate> = groups
        .into_iter()
        .map(|(date, rows)| {
            let hourly_means: Vec<f64> = rows.iter().filter_map(|r| r.avg_power_w).collect();
            let temperatures: Vec<f64> =
                rows.iter().filter_map(|r| r.avg_temperature_c).collect();
            let hours_measured: usize = rows.iter().map(|r| r.count_measurements).sum();

            let avg_power_w = stats::mean(&hourly_means);
            DailyAggregate {
                date,
                peak_power_w: stats::max(&hourly_means),
                avg_power_w,
                hours_measured,
                temp_avg_c: stats::mean(&temperatures),
                energy_wh: avg_power_w.map(|avg| avg * hours_measured as f64),
            }
        })
        .collect();

    info!("Computed {} daily summaries", daily.len());
    daily
}
