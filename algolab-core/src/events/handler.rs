//! Observer trait for suite lifecycle events.

use super::types::*;

/// Receives suite lifecycle events.
///
/// All hooks have empty default bodies, so implementors override only what
/// they care about. Handlers must be `Send + Sync`; the dispatcher may be
/// shared across threads.
pub trait HarnessEventHandler: Send + Sync {
    fn on_case_started(&self, _event: &CaseStartedEvent) {}

    fn on_case_completed(&self, _event: &CaseCompletedEvent) {}

    fn on_suite_completed(&self, _event: &SuiteCompletedEvent) {}

    fn on_regression_detected(&self, _event: &RegressionDetectedEvent) {}
}
