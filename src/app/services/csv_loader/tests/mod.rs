//! Test fixtures for the CSV loader
//!
//! Provides builders for synthetic measurement CSV content used across the
//! loader test modules.

use crate::config::AnalysisConfig;


/// Analysis config with limits loosened for small fixtures
pub fn test_config() -> AnalysisConfig {
    AnalysisConfig {
        min_rows: 5,
        ..AnalysisConfig::default()
    }
}

/// Build CSV content with the canonical header and `rows` well-formed rows
///
/// Timestamps advance in 15-minute steps from 2025-06-01 06:00:00.
pub fn sample_csv(rows: usize) -> String {
    let mut content = String::from("timestamp,voltage_V,current_A,power_W,temperature_C\n");
    for i in 0..rows {
        let minutes = i * 15;
        let hour = 6 + minutes / 60;
        let minute = minutes % 60;
        content.push_str(&format!(
            "2025-06-01 {:02}:{:02}:00,45.{},0.9,40.5,28.0\n",
            hour % 24,
            minute,
            i % 10
        ));
    }
    content
}

/// Build CSV content from explicit rows under a custom header
pub fn csv_with_rows(header: &str, rows: &[&str]) -> String {
    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    content
}
