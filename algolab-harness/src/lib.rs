//! # algolab-harness
//!
//! Pluggable benchmarking harness for comparison-style algorithms.
//! Three stages:
//! - **Register**: sorting, searching, and graph units implement the
//!   contract traits and join a [`registry::Registry`] under a unique name.
//! - **Run**: [`engine::HarnessEngine`] expands the configured sizes and
//!   input patterns into deterministic workloads, runs every unit with
//!   warmup and repeated samples, and verifies outputs against oracles.
//! - **Report**: timing and operation-count statistics per case, an
//!   empirical complexity fit per unit, JSON/markdown rendering, and
//!   baseline regression comparison.
//!
//! Measurement is sequential for timing fidelity; only workload
//! pre-generation is parallel.

pub mod complexity_fit;
pub mod contract;
pub mod engine;
pub mod registry;
pub mod report;
pub mod stats;
pub mod verify;
pub mod workload;

pub use complexity_fit::{ComplexityFit, FitBasis, FitPoint};
pub use contract::{
    AnyAlgorithm, GraphAlgorithm, GraphOutcome, InputGraph, SearchAlgorithm, SortAlgorithm,
};
pub use engine::{HarnessEngine, SuiteOutcome};
pub use registry::Registry;
pub use report::{CaseRecord, Regression, SuiteReport};
pub use stats::CaseStats;
pub use workload::{ArrayPattern, ArrayWorkload, GraphTopology, GraphWorkload, WorkloadPlan};
