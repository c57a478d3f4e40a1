//! Core vocabulary for the algolab benchmarking harness.
//!
//! Everything the framework and the algorithm unit packs share lives here:
//! complexity classes and declared profiles, operation meters, the
//! deterministic workload RNG, subsystem error enums, layered configuration,
//! progress events, cooperative cancellation, and tracing setup.
//!
//! This crate carries no algorithms and no measurement logic; those live in
//! `algolab-harness` and `algolab-algos`.

pub mod collections;
pub mod complexity;
pub mod config;
pub mod errors;
pub mod events;
pub mod metrics;
pub mod rng;
pub mod telemetry;
pub mod traits;

pub use complexity::{AlgorithmFamily, AlgorithmMeta, ComplexityClass, ComplexityProfile};
pub use errors::{HarnessError, HarnessResult};
pub use metrics::{OpMeter, OpSnapshot};
pub use rng::SeededRng;
pub use traits::cancellation::{Cancellable, CancellationToken};
