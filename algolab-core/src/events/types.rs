//! Event payload types for the suite lifecycle.

/// Payload for `on_case_started`.
#[derive(Debug, Clone)]
pub struct CaseStartedEvent {
    pub algorithm: String,
    pub case: String,
    pub size: usize,
}

/// Payload for `on_case_completed`.
#[derive(Debug, Clone)]
pub struct CaseCompletedEvent {
    pub algorithm: String,
    pub case: String,
    pub size: usize,
    pub median_ns: f64,
    pub verified: bool,
    pub truncated: bool,
}

/// Payload for `on_suite_completed`.
#[derive(Debug, Clone)]
pub struct SuiteCompletedEvent {
    pub suite: String,
    pub cases: usize,
    pub duration_ms: u64,
    pub error_count: usize,
}

/// Payload for `on_regression_detected`.
#[derive(Debug, Clone)]
pub struct RegressionDetectedEvent {
    pub algorithm: String,
    pub case: String,
    pub size: usize,
    pub baseline_median_ns: f64,
    pub current_median_ns: f64,
    pub ratio: f64,
}
