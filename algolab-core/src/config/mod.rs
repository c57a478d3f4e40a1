//! Configuration system for the harness.
//! TOML-based, 4-layer resolution: overrides > env > project > defaults.

pub mod harness_config;
pub mod report_config;
pub mod runner_config;
pub mod workload_config;

pub use harness_config::{HarnessConfig, RunOverrides};
pub use report_config::ReportConfig;
pub use runner_config::RunnerConfig;
pub use workload_config::WorkloadConfig;
