//! Report and baseline configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for report output and baseline comparison.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Baseline report to compare against. No comparison when unset.
    pub baseline_path: Option<PathBuf>,
    /// Fractional slowdown over baseline that counts as a regression.
    /// Default: 0.15.
    pub regression_threshold: Option<f64>,
}

impl ReportConfig {
    /// Returns the effective regression threshold, defaulting to 0.15.
    pub fn effective_regression_threshold(&self) -> f64 {
        self.regression_threshold.unwrap_or(0.15)
    }
}
