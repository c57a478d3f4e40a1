//! Top-level harness errors and non-fatal error collection.

use super::error_code::{self, LabErrorCode};
use super::{ConfigError, RegistryError, ReportError, RunError, WorkloadError};

/// Errors that can occur during a harness suite run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Workload error: {0}")]
    Workload(#[from] WorkloadError),

    #[error("Run error: {0}")]
    Run(#[from] RunError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Suite cancelled")]
    Cancelled,
}

impl LabErrorCode for HarnessError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Registry(e) => e.error_code(),
            Self::Workload(e) => e.error_code(),
            Self::Run(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
            Self::Cancelled => error_code::CANCELLED,
        }
    }
}

/// Result of a suite run that accumulates non-fatal errors.
/// A unit that panics or fails verification is recorded here while the
/// rest of the suite keeps running.
#[derive(Debug, Default)]
pub struct HarnessResult<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal errors collected during the run.
    pub errors: Vec<HarnessError>,
}

impl<T: Default> HarnessResult<T> {
    /// Create a result carrying `data` and no errors.
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Add a non-fatal error to the result.
    pub fn add_error(&mut self, error: HarnessError) {
        self.errors.push(error);
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of non-fatal errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
