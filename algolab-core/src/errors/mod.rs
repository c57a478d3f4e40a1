//! Error handling for the harness.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod harness_error;
pub mod registry_error;
pub mod report_error;
pub mod run_error;
pub mod workload_error;

pub use config_error::ConfigError;
pub use error_code::LabErrorCode;
pub use harness_error::{HarnessError, HarnessResult};
pub use registry_error::RegistryError;
pub use report_error::ReportError;
pub use run_error::RunError;
pub use workload_error::WorkloadError;
