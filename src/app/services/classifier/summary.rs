//! Classification summary counts and percentages

use serde::{Deserialize, Serialize};

use crate::app::models::{ClassifiedMeasurement, SkyCondition};

/// Label counts and percentages over a classified measurement set
///
/// The three counts sum to the number of classified rows and the three
/// percentages to 100 (within floating-point tolerance); an empty set
/// yields all-zero percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationSummary {
    pub clear_count: usize,
    pub clear_pct: f64,
    pub marginal_count: usize,
    pub marginal_pct: f64,
    pub cloudy_count: usize,
    pub cloudy_pct: f64,
}

impl ClassificationSummary {
    /// Total number of classified rows
    pub fn total_rows(&self) -> usize {
        self.clear_count + self.marginal_count + self.cloudy_count
    }
}

/// Summarize a classified measurement set
pub fn summarize(classified: &[ClassifiedMeasurement]) -> ClassificationSummary {
    let count_of = |condition: SkyCondition| {
        classified
            .iter()
            .filter(|c| c.condition == condition)
            .count()
    };

    let clear_count = count_of(SkyCondition::Clear);
    let marginal_count = count_of(SkyCondition::Marginal);
    let cloudy_count = count_of(SkyCondition::Cloudy);

    let pct = |count: usize| {
        if classified.is_empty() {
            0.0
        } else {
            count as f64 / classified.len() as f64 * 100.0
        }
    };

    ClassificationSummary {
        clear_count,
        clear_pct: pct(clear_count),
        marginal_count,
        marginal_pct: pct(marginal_count),
        cloudy_count,
        cloudy_pct: pct(cloudy_count),
    }
}
