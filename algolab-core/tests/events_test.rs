//! Tests for the suite event system.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use algolab_core::events::dispatcher::EventDispatcher;
use algolab_core::events::handler::HarnessEventHandler;
use algolab_core::events::types::*;

fn case_started() -> CaseStartedEvent {
    CaseStartedEvent {
        algorithm: "merge_sort".into(),
        case: "random".into(),
        size: 1000,
    }
}

/// A test handler that counts events.
struct CountingHandler {
    case_started: AtomicUsize,
    case_completed: AtomicUsize,
    suite_completed: AtomicUsize,
    regressions: AtomicUsize,
}

impl CountingHandler {
    fn new() -> Self {
        Self {
            case_started: AtomicUsize::new(0),
            case_completed: AtomicUsize::new(0),
            suite_completed: AtomicUsize::new(0),
            regressions: AtomicUsize::new(0),
        }
    }
}

impl HarnessEventHandler for CountingHandler {
    fn on_case_started(&self, _event: &CaseStartedEvent) {
        self.case_started.fetch_add(1, Ordering::Relaxed);
    }

    fn on_case_completed(&self, _event: &CaseCompletedEvent) {
        self.case_completed.fetch_add(1, Ordering::Relaxed);
    }

    fn on_suite_completed(&self, _event: &SuiteCompletedEvent) {
        self.suite_completed.fetch_add(1, Ordering::Relaxed);
    }

    fn on_regression_detected(&self, _event: &RegressionDetectedEvent) {
        self.regressions.fetch_add(1, Ordering::Relaxed);
    }
}

#[test]
fn handler_compiles_with_noop_defaults() {
    struct NoopHandler;
    impl HarnessEventHandler for NoopHandler {}

    let handler = NoopHandler;
    // All hooks should be callable without implementing them
    handler.on_case_started(&case_started());
    handler.on_case_completed(&CaseCompletedEvent {
        algorithm: "merge_sort".into(),
        case: "random".into(),
        size: 1000,
        median_ns: 12_345.0,
        verified: true,
        truncated: false,
    });
    handler.on_suite_completed(&SuiteCompletedEvent {
        suite: "standard".into(),
        cases: 9,
        duration_ms: 120,
        error_count: 0,
    });
}

#[test]
fn dispatcher_with_zero_handlers_is_a_noop() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);

    // Should not panic with zero handlers
    dispatcher.emit_case_started(&case_started());
    dispatcher.emit_suite_completed(&SuiteCompletedEvent {
        suite: "standard".into(),
        cases: 0,
        duration_ms: 0,
        error_count: 0,
    });
}

#[test]
fn all_registered_handlers_receive_events() {
    let mut dispatcher = EventDispatcher::new();

    let handler1 = Arc::new(CountingHandler::new());
    let handler2 = Arc::new(CountingHandler::new());

    dispatcher.register(handler1.clone());
    dispatcher.register(handler2.clone());

    assert_eq!(dispatcher.handler_count(), 2);

    dispatcher.emit_case_started(&case_started());

    assert_eq!(handler1.case_started.load(Ordering::Relaxed), 1);
    assert_eq!(handler2.case_started.load(Ordering::Relaxed), 1);
}

#[test]
fn panicking_handler_does_not_crash_the_dispatcher() {
    struct PanickingHandler;
    impl HarnessEventHandler for PanickingHandler {
        fn on_case_started(&self, _event: &CaseStartedEvent) {
            panic!("intentional panic in handler");
        }
    }

    let mut dispatcher = EventDispatcher::new();
    let panicking = Arc::new(PanickingHandler);
    let counting = Arc::new(CountingHandler::new());

    // Register panicking handler first, then counting handler
    dispatcher.register(panicking);
    dispatcher.register(counting.clone());

    dispatcher.emit_case_started(&case_started());

    // The counting handler should still receive the event
    assert_eq!(counting.case_started.load(Ordering::Relaxed), 1);
}

#[test]
fn regression_payload_arrives_intact() {
    struct CapturingHandler {
        captured_size: AtomicUsize,
        captured_ratio_milli: AtomicUsize,
    }

    impl HarnessEventHandler for CapturingHandler {
        fn on_regression_detected(&self, event: &RegressionDetectedEvent) {
            self.captured_size.store(event.size, Ordering::Relaxed);
            self.captured_ratio_milli
                .store((event.ratio * 1000.0) as usize, Ordering::Relaxed);
        }
    }

    let mut dispatcher = EventDispatcher::new();
    let handler = Arc::new(CapturingHandler {
        captured_size: AtomicUsize::new(0),
        captured_ratio_milli: AtomicUsize::new(0),
    });
    dispatcher.register(handler.clone());

    dispatcher.emit_regression_detected(&RegressionDetectedEvent {
        algorithm: "quick_sort".into(),
        case: "reversed".into(),
        size: 5000,
        baseline_median_ns: 1_000_000.0,
        current_median_ns: 1_500_000.0,
        ratio: 1.5,
    });

    assert_eq!(handler.captured_size.load(Ordering::Relaxed), 5000);
    assert_eq!(handler.captured_ratio_milli.load(Ordering::Relaxed), 1500);
}

#[test]
fn dispatcher_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EventDispatcher>();
}
