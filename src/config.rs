//! Configuration for the analysis pipeline.
//!
//! Provides the panel datasheet specification, per-column plausibility
//! ranges, and analysis parameters. All values are caller-supplied; the
//! defaults describe the reference 48W transparent CdTe sample panel.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CLEAR_SKY_THRESHOLD_MAX, CLEAR_SKY_THRESHOLD_MIN, DEFAULT_CLEAR_SKY_THRESHOLD,
    DEFAULT_MAX_FILE_SIZE_MB, DEFAULT_MIN_ROWS,
};

/// Electrical specification of the monitored panel, from its datasheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSpecs {
    /// Rated power at Standard Test Conditions, in watts
    pub rated_power_w: f64,

    /// Open-circuit voltage at STC, in volts
    pub voc_v: f64,

    /// Short-circuit current at STC, in amps
    pub isc_a: f64,

    /// Voltage at the maximum power point, in volts
    pub vmpp_v: f64,

    /// Current at the maximum power point, in amps
    pub impp_a: f64,

    /// Power temperature coefficient, per degree Celsius (negative)
    pub temp_coefficient_per_celsius: f64,

    /// Reference cell temperature for the coefficient, in Celsius
    pub reference_temperature_celsius: f64,

    /// Nominal Operating Cell Temperature, in Celsius
    pub noct_celsius: f64,
}

impl Default for PanelSpecs {
    fn default() -> Self {
        Self {
            rated_power_w: 48.0,
            voc_v: 58.9,
            isc_a: 1.18,
            vmpp_v: 47.6,
            impp_a: 1.03,
            temp_coefficient_per_celsius: -0.0029,
            reference_temperature_celsius: 25.0,
            noct_celsius: 45.0,
        }
    }
}

impl PanelSpecs {
    /// Set the rated power
    pub fn with_rated_power(mut self, rated_power_w: f64) -> Self {
        self.rated_power_w = rated_power_w;
        self
    }

    /// Set the open-circuit voltage
    pub fn with_voc(mut self, voc_v: f64) -> Self {
        self.voc_v = voc_v;
        self
    }
}

/// Expected value range per measurement column, used for outlier detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidRanges {
    pub voltage_v: (f64, f64),
    pub current_a: (f64, f64),
    pub power_w: (f64, f64),
    pub temperature_c: (f64, f64),
}

impl Default for ValidRanges {
    fn default() -> Self {
        Self {
            voltage_v: (0.0, 100.0),
            current_a: (0.0, 10.0),
            power_w: (0.0, 500.0),
            temperature_c: (-20.0, 80.0),
        }
    }
}

impl ValidRanges {
    /// Ranges paired with their column names, in canonical column order
    pub fn bounds(&self) -> [(&'static str, (f64, f64)); 4] {
        [
            ("voltage_V", self.voltage_v),
            ("current_A", self.current_a),
            ("power_W", self.power_w),
            ("temperature_C", self.temperature_c),
        ]
    }
}

/// Parameters controlling how an analysis run behaves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum row count for an analysable dataset
    pub min_rows: usize,

    /// Maximum accepted input file size in megabytes
    pub max_file_size_mb: usize,

    /// Clear-sky classification threshold; clamped to [0.5, 0.9] on use
    pub clear_sky_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_rows: DEFAULT_MIN_ROWS,
            max_file_size_mb: DEFAULT_MAX_FILE_SIZE_MB,
            clear_sky_threshold: DEFAULT_CLEAR_SKY_THRESHOLD,
        }
    }
}

/// Global configuration for a pipeline run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Panel datasheet specification
    pub panel: PanelSpecs,

    /// Per-column plausibility ranges
    pub ranges: ValidRanges,

    /// Analysis parameters
    pub analysis: AnalysisConfig,
}

impl Config {
    /// Create configuration with a custom classification threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.analysis.clear_sky_threshold = threshold;
        self
    }

    /// Create configuration with a custom minimum row count
    pub fn with_min_rows(mut self, min_rows: usize) -> Self {
        self.analysis.min_rows = min_rows;
        self
    }

    /// Create configuration with a custom file size ceiling
    pub fn with_max_file_size_mb(mut self, max_file_size_mb: usize) -> Self {
        self.analysis.max_file_size_mb = max_file_size_mb;
        self
    }

    /// Create configuration with custom panel specs
    pub fn with_panel(mut self, panel: PanelSpecs) -> Self {
        self.panel = panel;
        self
    }

    /// The classification threshold clamped to its accepted range
    pub fn effective_threshold(&self) -> f64 {
        self.analysis
            .clear_sky_threshold
            .clamp(CLEAR_SKY_THRESHOLD_MIN, CLEAR_SKY_THRESHOLD_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_panel_matches_datasheet() {
        let specs = PanelSpecs::default();
        assert_eq!(specs.rated_power_w, 48.0);
        assert_eq!(specs.voc_v, 58.9);
        assert_eq!(specs.reference_temperature_celsius, 25.0);
        assert!(specs.temp_coefficient_per_celsius < 0.0);
    }

    #[test]
    fn test_valid_range_bounds_order() {
        let ranges = ValidRanges::default();
        let bounds = ranges.bounds();
        assert_eq!(bounds[0].0, "voltage_V");
        assert_eq!(bounds[2], ("power_W", (0.0, 500.0)));
        assert_eq!(bounds[3], ("temperature_C", (-20.0, 80.0)));
    }

    #[test]
    fn test_effective_threshold_clamping() {
        assert_eq!(Config::default().with_threshold(0.1).effective_threshold(), 0.5);
        assert_eq!(Config::default().with_threshold(1.5).effective_threshold(), 0.9);
        assert_eq!(Config::default().with_threshold(0.7).effective_threshold(), 0.7);
    }

    #[test]
    fn test_builder_methods() {
        let config = Config::default()
            .with_min_rows(10)
            .with_max_file_size_mb(5)
            .with_panel(PanelSpecs::default().with_rated_power(96.0).with_voc(120.0));

        assert_eq!(config.analysis.min_rows, 10);
        assert_eq!(config.analysis.max_file_size_mb, 5);
        assert_eq!(config.panel.rated_power_w, 96.0);
        assert_eq!(config.panel.voc_v, 120.0);
    }
}
