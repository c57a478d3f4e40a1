//! Measurement runner configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the measurement loop.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RunnerConfig {
    /// Warmup runs per case, unmeasured. Default: 1.
    pub warmup: Option<u32>,
    /// Measured samples per case. Default: 5.
    pub samples: Option<u32>,
    /// Hard per-sample time limit in milliseconds. Default: 2000.
    pub sample_time_limit_ms: Option<u64>,
    /// Pre-generate workloads in parallel. Default: true.
    pub parallel_generation: Option<bool>,
}

impl RunnerConfig {
    /// Returns the effective warmup count, defaulting to 1.
    pub fn effective_warmup(&self) -> u32 {
        self.warmup.unwrap_or(1)
    }

    /// Returns the effective sample count, defaulting to 5.
    pub fn effective_samples(&self) -> u32 {
        self.samples.unwrap_or(5)
    }

    /// Returns the effective per-sample time limit, defaulting to 2000ms.
    pub fn effective_sample_time_limit_ms(&self) -> u64 {
        self.sample_time_limit_ms.unwrap_or(2_000)
    }

    /// Returns whether workloads are pre-generated in parallel. Default: true.
    pub fn effective_parallel_generation(&self) -> bool {
        self.parallel_generation.unwrap_or(true)
    }
}
