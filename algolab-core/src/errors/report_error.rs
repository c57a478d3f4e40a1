//! Report serialization and baseline errors.

use super::error_code::{self, LabErrorCode};

/// Errors that can occur while writing reports or comparing baselines.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to write report to {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read baseline from {path}: {source}")]
    BaselineReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Baseline has no entry for case {0:?}")]
    BaselineMissing(String),
}

impl LabErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
