//! Registry errors.

use super::error_code::{self, LabErrorCode};
use crate::complexity::AlgorithmFamily;

/// Errors that can occur while registering or looking up algorithm units.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("No algorithms are registered")]
    Empty,

    #[error("Algorithm {0:?} is already registered")]
    DuplicateName(String),

    #[error("Unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),

    #[error("Algorithm name must be non-empty")]
    EmptyName,

    #[error("No {0} algorithms are registered")]
    EmptyFamily(AlgorithmFamily),

    #[error("Algorithm {name:?} declares an ill-formed profile: best exceeds average or average exceeds worst")]
    InvalidProfile { name: String },

    #[error("Algorithm {name:?} is registered as {actual}, not {expected}")]
    FamilyMismatch {
        name: String,
        expected: AlgorithmFamily,
        actual: AlgorithmFamily,
    },
}

impl LabErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        error_code::REGISTRY_ERROR
    }
}
