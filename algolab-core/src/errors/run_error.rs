//! Measurement run errors.

use super::error_code::{self, LabErrorCode};

/// Errors that can occur while executing a registered unit against a case.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Unit {name} panicked on case {case}: {message}")]
    UnitPanic {
        name: String,
        case: String,
        message: String,
    },

    #[error("Unit {name} produced an incorrect result on case {case}: {detail}")]
    VerificationFailed {
        name: String,
        case: String,
        detail: String,
    },
}

impl LabErrorCode for RunError {
    fn error_code(&self) -> &'static str {
        error_code::RUN_ERROR
    }
}
