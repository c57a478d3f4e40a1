//! Per-case timing and operation statistics.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, Distribution, Max, Min, OrderStatistics};

use algolab_core::OpSnapshot;

/// One measured run of a unit against a case input.
#[derive(Debug, Clone)]
pub struct Sample {
    pub duration: Duration,
    pub ops: OpSnapshot,
    pub verified: bool,
}

/// Aggregated statistics over a case's samples.
///
/// Timing fields are nanoseconds. Operation counters are the median over
/// samples; deterministic units report identical counters every sample,
/// so the median is exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStats {
    pub samples: usize,
    pub mean_ns: f64,
    pub median_ns: f64,
    pub std_dev_ns: f64,
    pub min_ns: f64,
    pub max_ns: f64,
    pub p95_ns: f64,
    pub comparisons: u64,
    pub moves: u64,
    pub aux_bytes: u64,
}

impl CaseStats {
    /// Aggregate `samples`. Returns `None` when the slice is empty.
    pub fn from_samples(samples: &[Sample]) -> Option<CaseStats> {
        if samples.is_empty() {
            return None;
        }

        let times: Vec<f64> = samples
            .iter()
            .map(|s| s.duration.as_nanos() as f64)
            .collect();
        let mut data = Data::new(times);

        let mean = data.mean().unwrap_or(0.0);
        let std_dev = if samples.len() < 2 {
            0.0
        } else {
            data.std_dev().unwrap_or(0.0)
        };

        Some(CaseStats {
            samples: samples.len(),
            mean_ns: finite_or_zero(mean),
            median_ns: finite_or_zero(data.median()),
            std_dev_ns: finite_or_zero(std_dev),
            min_ns: finite_or_zero(data.min()),
            max_ns: finite_or_zero(data.max()),
            p95_ns: finite_or_zero(data.percentile(95)),
            comparisons: median_u64(samples.iter().map(|s| s.ops.comparisons)),
            moves: median_u64(samples.iter().map(|s| s.ops.moves)),
            aux_bytes: median_u64(samples.iter().map(|s| s.ops.aux_bytes)),
        })
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Median of an integer series without leaving integer space. Even
/// lengths take the upper middle element.
fn median_u64(values: impl Iterator<Item = u64>) -> u64 {
    let mut sorted: Vec<u64> = values.collect();
    if sorted.is_empty() {
        return 0;
    }
    sorted.sort_unstable();
    sorted[sorted.len() / 2]
}
