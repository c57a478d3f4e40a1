//! Stable machine-readable error codes.
//!
//! Reports and event payloads carry these codes so downstream consumers
//! can match on them without parsing display strings.

pub const CONFIG_ERROR: &str = "ALGOLAB_CONFIG";
pub const REGISTRY_ERROR: &str = "ALGOLAB_REGISTRY";
pub const WORKLOAD_ERROR: &str = "ALGOLAB_WORKLOAD";
pub const RUN_ERROR: &str = "ALGOLAB_RUN";
pub const REPORT_ERROR: &str = "ALGOLAB_REPORT";
pub const CANCELLED: &str = "ALGOLAB_CANCELLED";

/// Maps an error to its stable code.
pub trait LabErrorCode {
    fn error_code(&self) -> &'static str;
}
