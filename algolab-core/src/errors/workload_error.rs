//! Workload generation errors.

use super::error_code::{self, LabErrorCode};

/// Errors that can occur while planning or generating workloads.
#[derive(Debug, thiserror::Error)]
pub enum WorkloadError {
    #[error("Workload has no input sizes")]
    EmptySizes,

    #[error("Invalid value range: min {min} exceeds max {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("Unknown array pattern: {0:?}")]
    UnknownPattern(String),

    #[error("Graph workload needs at least 2 nodes, got {nodes}")]
    GraphTooSmall { nodes: usize },

    #[error("Graph degree {degree} is unreachable with {nodes} nodes")]
    DegreeTooHigh { degree: usize, nodes: usize },
}

impl LabErrorCode for WorkloadError {
    fn error_code(&self) -> &'static str {
        error_code::WORKLOAD_ERROR
    }
}
