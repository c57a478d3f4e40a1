//! EventDispatcher: synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::HarnessEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// When no handlers are registered, `emit` iterates over an empty Vec,
/// effectively zero cost.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn HarnessEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn HarnessEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// Handlers that panic are caught and do not prevent subsequent handlers
    /// from receiving the event.
    fn emit<F: Fn(&dyn HarnessEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked, continuing with remaining handlers");
            }
        }
    }

    pub fn emit_case_started(&self, event: &CaseStartedEvent) {
        self.emit(|h| h.on_case_started(event));
    }

    pub fn emit_case_completed(&self, event: &CaseCompletedEvent) {
        self.emit(|h| h.on_case_completed(event));
    }

    pub fn emit_suite_completed(&self, event: &SuiteCompletedEvent) {
        self.emit(|h| h.on_suite_completed(event));
    }

    pub fn emit_regression_detected(&self, event: &RegressionDetectedEvent) {
        self.emit(|h| h.on_regression_detected(event));
    }
}
