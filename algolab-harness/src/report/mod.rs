//! Suite reports: the JSON interchange model, baseline persistence, and
//! regression comparison.

pub mod markdown;

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use algolab_core::errors::ReportError;
use algolab_core::AlgorithmFamily;

use crate::complexity_fit::ComplexityFit;
use crate::stats::CaseStats;

pub use markdown::render_markdown;

/// One measured (algorithm, case, size) cell of a suite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub algorithm: String,
    pub family: AlgorithmFamily,
    /// Pattern or topology label.
    pub case: String,
    pub size: usize,
    pub stats: CaseStats,
    /// Conjunction of per-sample verification.
    pub verified: bool,
    /// Sampling stopped early under the per-sample time limit.
    pub truncated: bool,
}

impl CaseRecord {
    /// Stable baseline-matching key.
    pub fn key(&self) -> String {
        format!("{}/{}/{}", self.algorithm, self.case, self.size)
    }
}

/// A case that got slower than the baseline beyond the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regression {
    pub algorithm: String,
    pub case: String,
    pub size: usize,
    pub baseline_median_ns: f64,
    pub current_median_ns: f64,
    /// `current_median_ns / baseline_median_ns`.
    pub ratio: f64,
}

/// Everything a suite run produced, in interchange form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub suite: String,
    pub seed: u64,
    pub created_at: DateTime<Utc>,
    /// Config echo, so a report is interpretable on its own.
    pub sizes: Vec<usize>,
    pub warmup: u32,
    pub samples: u32,
    pub records: Vec<CaseRecord>,
    pub fits: Vec<ComplexityFit>,
    pub regressions: Vec<Regression>,
}

impl SuiteReport {
    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<SuiteReport, ReportError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write this report as a baseline file.
    pub fn save_baseline(&self, path: &Path) -> Result<(), ReportError> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| ReportError::WriteFailed {
            path: path.display().to_string(),
            source,
        })
    }

    /// Read a baseline report back.
    pub fn load_baseline(path: &Path) -> Result<SuiteReport, ReportError> {
        let json =
            std::fs::read_to_string(path).map_err(|source| ReportError::BaselineReadFailed {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_json(&json)
    }
}

/// Compare `current` against `baseline` and collect regressions.
///
/// Records match by `(algorithm, case, size)`. A record regresses when its
/// median exceeds the baseline median by more than `threshold` (fractional:
/// 0.15 flags >15% slowdowns). Zero or negative baseline medians never
/// flag, so a broken or empty baseline cannot fail a suite.
pub fn compare_with_baseline(
    current: &SuiteReport,
    baseline: &SuiteReport,
    threshold: f64,
) -> Vec<Regression> {
    let baseline_by_key: rustc_hash::FxHashMap<String, &CaseRecord> = baseline
        .records
        .iter()
        .map(|r| (r.key(), r))
        .collect();

    let mut regressions = Vec::new();
    for record in &current.records {
        let Some(base) = baseline_by_key.get(&record.key()) else {
            continue;
        };
        let baseline_median = base.stats.median_ns;
        if baseline_median <= 0.0 || !baseline_median.is_finite() {
            continue;
        }
        let ratio = record.stats.median_ns / baseline_median;
        if ratio > 1.0 + threshold {
            regressions.push(Regression {
                algorithm: record.algorithm.clone(),
                case: record.case.clone(),
                size: record.size,
                baseline_median_ns: baseline_median,
                current_median_ns: record.stats.median_ns,
                ratio,
            });
        }
    }
    regressions
}
