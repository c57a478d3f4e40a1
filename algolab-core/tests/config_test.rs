//! Tests for the layered configuration system.

use std::sync::Mutex;

use algolab_core::config::{HarnessConfig, RunOverrides};
use algolab_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper: create a temporary directory.
fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all ALGOLAB_ env vars to prevent cross-test contamination.
fn clear_algolab_env_vars() {
    for key in [
        "ALGOLAB_SEED",
        "ALGOLAB_SAMPLES",
        "ALGOLAB_WARMUP",
        "ALGOLAB_SAMPLE_TIME_LIMIT_MS",
        "ALGOLAB_REGRESSION_THRESHOLD",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn overrides_beat_env_beat_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_algolab_env_vars();

    let dir = tempdir();
    let project_toml = dir.path().join("algolab.toml");
    std::fs::write(
        &project_toml,
        r#"
seed = 7

[runner]
samples = 3
warmup = 2
"#,
    )
    .unwrap();

    // Env overrides the project file for samples
    std::env::set_var("ALGOLAB_SAMPLES", "10");

    let overrides = RunOverrides {
        seed: Some(99),
        ..Default::default()
    };

    let config = HarnessConfig::load(dir.path(), Some(&overrides)).unwrap();

    // Programmatic overrides win over env and project for seed
    assert_eq!(config.seed, Some(99));
    // Env wins over project for samples
    assert_eq!(config.runner.samples, Some(10));
    // Project file survives where nothing overrides it
    assert_eq!(config.runner.warmup, Some(2));

    clear_algolab_env_vars();
}

#[test]
fn missing_project_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_algolab_env_vars();

    let dir = tempdir();
    // No algolab.toml exists
    let config = HarnessConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.effective_seed(), 42);
    assert_eq!(config.workload.effective_sizes(), vec![100, 1000, 5000]);
    assert_eq!(config.workload.effective_value_min(), 1);
    assert_eq!(config.workload.effective_value_max(), 10_000);
    assert_eq!(config.workload.effective_graph_nodes(), vec![64, 256, 1024]);
    assert_eq!(config.workload.effective_graph_degree(), 4);
    assert_eq!(config.runner.effective_warmup(), 1);
    assert_eq!(config.runner.effective_samples(), 5);
    assert_eq!(config.runner.effective_sample_time_limit_ms(), 2_000);
    assert!(config.runner.effective_parallel_generation());
    assert!((config.report.effective_regression_threshold() - 0.15).abs() < 1e-12);
}

#[test]
fn env_var_overrides_apply() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_algolab_env_vars();

    let dir = tempdir();
    std::env::set_var("ALGOLAB_SEED", "1234");
    std::env::set_var("ALGOLAB_SAMPLE_TIME_LIMIT_MS", "500");

    let config = HarnessConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.seed, Some(1234));
    assert_eq!(config.runner.sample_time_limit_ms, Some(500));

    clear_algolab_env_vars();
}

#[test]
fn invalid_toml_syntax_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_algolab_env_vars();

    let dir = tempdir();
    let project_toml = dir.path().join("algolab.toml");
    std::fs::write(&project_toml, "this is not valid toml {{{{").unwrap();

    let result = HarnessConfig::load(dir.path(), None);
    assert!(result.is_err());
    match result.unwrap_err() {
        ConfigError::ParseError { .. } => {} // expected
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn descending_sizes_fail_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_algolab_env_vars();

    let dir = tempdir();
    let project_toml = dir.path().join("algolab.toml");
    std::fs::write(
        &project_toml,
        r#"
[workload]
sizes = [5000, 1000, 100]
"#,
    )
    .unwrap();

    let result = HarnessConfig::load(dir.path(), None);
    assert!(result.is_err());
    match result.unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "workload.sizes");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn inverted_value_range_fails_validation() {
    let config = HarnessConfig::from_toml(
        r#"
[workload]
value_min = 500
value_max = 10
"#,
    );
    match config.unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "workload.value_min");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn zero_samples_fail_validation() {
    let config = HarnessConfig::from_toml(
        r#"
[runner]
samples = 0
"#,
    );
    match config.unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "runner.samples");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn out_of_range_regression_threshold_fails_validation() {
    let config = HarnessConfig::from_toml(
        r#"
[report]
regression_threshold = -0.5
"#,
    );
    assert!(matches!(
        config.unwrap_err(),
        ConfigError::ValidationFailed { .. }
    ));
}

#[test]
fn unrecognized_keys_are_accepted() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_algolab_env_vars();

    let dir = tempdir();
    let project_toml = dir.path().join("algolab.toml");
    std::fs::write(
        &project_toml,
        r#"
[workload]
sizes = [10, 20]
future_unknown_key = "hello"

[future_section]
another_key = 42
"#,
    )
    .unwrap();

    // Should not error on unknown keys
    let result = HarnessConfig::load(dir.path(), None);
    assert!(result.is_ok());
}

#[test]
fn config_round_trips_through_toml() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_algolab_env_vars();

    let dir = tempdir();
    let project_toml = dir.path().join("algolab.toml");
    std::fs::write(
        &project_toml,
        r#"
seed = 77

[workload]
sizes = [50, 500]
value_max = 999
patterns = ["random", "reversed"]

[runner]
samples = 7

[report]
regression_threshold = 0.25
"#,
    )
    .unwrap();

    let config1 = HarnessConfig::load(dir.path(), None).unwrap();
    let toml_str = config1.to_toml().unwrap();

    let config2 = HarnessConfig::from_toml(&toml_str).unwrap();

    assert_eq!(config1.seed, config2.seed);
    assert_eq!(config1.workload.sizes, config2.workload.sizes);
    assert_eq!(config1.workload.value_max, config2.workload.value_max);
    assert_eq!(config1.workload.patterns, config2.workload.patterns);
    assert_eq!(config1.runner.samples, config2.runner.samples);
    assert_eq!(
        config1.report.regression_threshold,
        config2.report.regression_threshold
    );
}
