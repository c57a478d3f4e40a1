//! Progress events for suite observers.
//! Synchronous dispatch, panic-isolated handlers, zero overhead when unused.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::HarnessEventHandler;
pub use types::{
    CaseCompletedEvent, CaseStartedEvent, RegressionDetectedEvent, SuiteCompletedEvent,
};
