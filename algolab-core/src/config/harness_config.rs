//! Top-level harness configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ReportConfig, RunnerConfig, WorkloadConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`ALGOLAB_*`)
/// 3. Project config (`algolab.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HarnessConfig {
    /// Suite seed every per-case seed derives from. Default: 42.
    pub seed: Option<u64>,
    pub workload: WorkloadConfig,
    pub runner: RunnerConfig,
    pub report: ReportConfig,
}

/// Programmatic override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub seed: Option<u64>,
    pub samples: Option<u32>,
    pub warmup: Option<u32>,
    pub sample_time_limit_ms: Option<u64>,
    pub regression_threshold: Option<f64>,
}

impl HarnessConfig {
    /// Load configuration with layered resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. Programmatic overrides
    /// 2. Environment variables (`ALGOLAB_*`)
    /// 3. Project config (`algolab.toml` in `root`)
    /// 4. Compiled defaults
    pub fn load(root: &Path, overrides: Option<&RunOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join("algolab.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): programmatic overrides
        if let Some(run) = overrides {
            Self::apply_overrides(&mut config, run);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Returns the effective suite seed, defaulting to 42.
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(42)
    }

    /// Validate the configuration values.
    pub fn validate(config: &HarnessConfig) -> Result<(), ConfigError> {
        let sizes = &config.workload.sizes;
        if !sizes.is_empty() {
            if sizes.contains(&0) {
                return Err(ConfigError::ValidationFailed {
                    field: "workload.sizes".to_string(),
                    message: "sizes must be greater than 0".to_string(),
                });
            }
            if sizes.windows(2).any(|w| w[0] >= w[1]) {
                return Err(ConfigError::ValidationFailed {
                    field: "workload.sizes".to_string(),
                    message: "sizes must be strictly ascending".to_string(),
                });
            }
        }
        if config.workload.effective_value_min() > config.workload.effective_value_max() {
            return Err(ConfigError::ValidationFailed {
                field: "workload.value_min".to_string(),
                message: "must not exceed value_max".to_string(),
            });
        }
        if config.workload.effective_graph_degree() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "workload.graph_degree".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.runner.effective_samples() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "runner.samples".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let threshold = config.report.effective_regression_threshold();
        if !(0.0..=10.0).contains(&threshold) {
            return Err(ConfigError::ValidationFailed {
                field: "report.regression_threshold".to_string(),
                message: "must be between 0.0 and 10.0".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut HarnessConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: HarnessConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` (or non-empty) value.
    fn merge(base: &mut HarnessConfig, other: &HarnessConfig) {
        if other.seed.is_some() {
            base.seed = other.seed;
        }

        // Workload
        if !other.workload.sizes.is_empty() {
            base.workload.sizes = other.workload.sizes.clone();
        }
        if other.workload.value_min.is_some() {
            base.workload.value_min = other.workload.value_min;
        }
        if other.workload.value_max.is_some() {
            base.workload.value_max = other.workload.value_max;
        }
        if !other.workload.patterns.is_empty() {
            base.workload.patterns = other.workload.patterns.clone();
        }
        if !other.workload.graph_nodes.is_empty() {
            base.workload.graph_nodes = other.workload.graph_nodes.clone();
        }
        if other.workload.graph_degree.is_some() {
            base.workload.graph_degree = other.workload.graph_degree;
        }

        // Runner
        if other.runner.warmup.is_some() {
            base.runner.warmup = other.runner.warmup;
        }
        if other.runner.samples.is_some() {
            base.runner.samples = other.runner.samples;
        }
        if other.runner.sample_time_limit_ms.is_some() {
            base.runner.sample_time_limit_ms = other.runner.sample_time_limit_ms;
        }
        if other.runner.parallel_generation.is_some() {
            base.runner.parallel_generation = other.runner.parallel_generation;
        }

        // Report
        if other.report.baseline_path.is_some() {
            base.report.baseline_path = other.report.baseline_path.clone();
        }
        if other.report.regression_threshold.is_some() {
            base.report.regression_threshold = other.report.regression_threshold;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ALGOLAB_SEED`, `ALGOLAB_SAMPLES`, etc.
    fn apply_env_overrides(config: &mut HarnessConfig) {
        if let Ok(val) = std::env::var("ALGOLAB_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ALGOLAB_SAMPLES") {
            if let Ok(v) = val.parse::<u32>() {
                config.runner.samples = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ALGOLAB_WARMUP") {
            if let Ok(v) = val.parse::<u32>() {
                config.runner.warmup = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ALGOLAB_SAMPLE_TIME_LIMIT_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.runner.sample_time_limit_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ALGOLAB_REGRESSION_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.report.regression_threshold = Some(v);
            }
        }
    }

    /// Apply programmatic overrides (highest priority).
    fn apply_overrides(config: &mut HarnessConfig, run: &RunOverrides) {
        if let Some(v) = run.seed {
            config.seed = Some(v);
        }
        if let Some(v) = run.samples {
            config.runner.samples = Some(v);
        }
        if let Some(v) = run.warmup {
            config.runner.warmup = Some(v);
        }
        if let Some(v) = run.sample_time_limit_ms {
            config.runner.sample_time_limit_ms = Some(v);
        }
        if let Some(v) = run.regression_threshold {
            config.report.regression_threshold = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
