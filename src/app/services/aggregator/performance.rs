//! Panel performance metrics
//!
//! Temperature-corrected power and the performance ratio, computed the way
//! the reference analysis does: the PR denominator assumes 15-minute
//! sampling intervals and both ratios are clipped to [0, 1.5].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::models::{ClassifiedMeasurement, Measurement, SkyCondition};
use crate::config::PanelSpecs;

/// Performance ratio of actual output against the rated output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRatio {
    /// Ratio over the full measurement set
    pub pr_all: f64,

    /// Ratio over CLEAR-classified measurements only; 0 when none exist
    pub pr_clear: f64,
}

/// Power corrected to the reference cell temperature
///
/// `P_corrected = P * (1 + alpha * (T_ref - T))`. `None` when either the
/// power or the temperature cell is null.
pub fn temperature_corrected_power(
    measurement: &Measurement,
    panel: &PanelSpecs,
) -> Option<f64> {
    let power = measurement.power_w?;
    let temperature = measurement.temperature_c?;

    let alpha = panel.temp_coefficient_per_celsius;
    let t_ref = panel.reference_temperature_celsius;
    Some(power * (1.0 + alpha * (t_ref - temperature)))
}

/// Compute performance ratios over a classified measurement set
pub fn performance_ratio(
    classified: &[ClassifiedMeasurement],
    panel: &PanelSpecs,
) -> PerformanceRatio {
    let pr_all = ratio_over(classified.iter(), panel);
    let pr_clear = ratio_over(
        classified
            .iter()
            .filter(|c| c.condition == SkyCondition::Clear),
        panel,
    );

    debug!("Performance ratio: all={:.3}, clear={:.3}", pr_all, pr_clear);
    PerformanceRatio { pr_all, pr_clear }
}

fn ratio_over<'a>(
    rows: impl Iterator<Item = &'a ClassifiedMeasurement>,
    panel: &PanelSpecs,
) -> f64 {
    let mut count = 0_usize;
    let mut power_sum = 0.0;
    for row in rows {
        count += 1;
        if let Some(p) = row.measurement.power_w {
            power_sum += p;
        }
    }
    if count == 0 {
        return 0.0;
    }

    // Reference denominator, assuming 15-minute sampling intervals
    let expected = panel.rated_power_w * count as f64 / 2.0;
    (power_sum / expected).clamp(0.0, 1.5)
}
