//! Suite execution: warmup, sampling, verification, aggregation.
//!
//! The engine walks every generated case in plan order and, per case, every
//! registered unit of the matching family sorted by name. Measurement stays
//! on the calling thread; a run that panics or fails verification is recorded
//! as a non-fatal error while the rest of the suite keeps going.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use algolab_core::config::HarnessConfig;
use algolab_core::errors::{RegistryError, RunError};
use algolab_core::events::{
    CaseCompletedEvent, CaseStartedEvent, EventDispatcher, HarnessEventHandler,
    RegressionDetectedEvent, SuiteCompletedEvent,
};
use algolab_core::{Cancellable, CancellationToken, HarnessError, HarnessResult, OpMeter};

use crate::complexity_fit::{fit_case, ComplexityFit, FitBasis, FitPoint};
use crate::contract::AnyAlgorithm;
use crate::registry::Registry;
use crate::report::{compare_with_baseline, CaseRecord, SuiteReport};
use crate::stats::{CaseStats, Sample};
use crate::verify;
use crate::workload::{CaseInput, GeneratedCase, PlannedCase, WorkloadPlan};

const DEFAULT_SUITE: &str = "standard";

/// A finished suite: the report plus any non-fatal errors collected along
/// the way. `data` holds the [`SuiteReport`].
pub type SuiteOutcome = HarnessResult<SuiteReport>;

/// Runs every registered unit over the configured workload plan.
pub struct HarnessEngine {
    registry: Registry,
    config: HarnessConfig,
    dispatcher: EventDispatcher,
    token: CancellationToken,
    suite: String,
}

impl HarnessEngine {
    pub fn new(registry: Registry, config: HarnessConfig) -> Self {
        Self {
            registry,
            config,
            dispatcher: EventDispatcher::new(),
            token: CancellationToken::new(),
            suite: DEFAULT_SUITE.to_string(),
        }
    }

    /// Name carried into the report and suite events.
    pub fn with_suite_name(mut self, name: impl Into<String>) -> Self {
        self.suite = name.into();
        self
    }

    /// Register a lifecycle event handler.
    pub fn with_handler(mut self, handler: Arc<dyn HarnessEventHandler>) -> Self {
        self.dispatcher.register(handler);
        self
    }

    /// Share a cancellation token with the caller.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.token = token;
        self
    }

    /// The token this engine checks between runs. Cancelling it ends the
    /// suite at the next run boundary with partial results.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Run the full suite.
    ///
    /// Hard failures are limited to plan construction: an invalid config,
    /// an empty registry, or a workload that cannot be expanded. Everything
    /// after that point is collected as non-fatal errors in the outcome.
    /// Families with no registered units are skipped.
    pub fn run_suite(&self) -> Result<SuiteOutcome, HarnessError> {
        let started = Instant::now();

        HarnessConfig::validate(&self.config)?;
        if self.registry.is_empty() {
            return Err(RegistryError::Empty.into());
        }
        let plan = WorkloadPlan::from_config(&self.config)?;

        info!(
            suite = %self.suite,
            units = self.registry.len(),
            planned = plan.len(),
            seed = plan.suite_seed,
            "starting suite"
        );

        // Only generate inputs a registered unit will actually consume.
        let wanted: Vec<&PlannedCase> = plan
            .cases()
            .iter()
            .filter(|case| !self.registry.family(case.family).is_empty())
            .collect();
        let generated: Vec<GeneratedCase> = if self.config.runner.effective_parallel_generation() {
            wanted.par_iter().map(|case| plan.generate(case)).collect()
        } else {
            wanted.iter().map(|case| plan.generate(case)).collect()
        };
        debug!(cases = generated.len(), "workloads generated");

        let mut errors: Vec<HarnessError> = Vec::new();
        let mut records: Vec<CaseRecord> = Vec::new();
        let mut cancelled = false;

        'suite: for case in &generated {
            for unit in self.registry.family(case.planned.family) {
                if self.token.is_cancelled() {
                    cancelled = true;
                    break 'suite;
                }
                if let Some(record) = self.measure_case(unit, case, &mut errors) {
                    records.push(record);
                }
            }
        }

        let fits = self.fit_records(&records);

        let mut report = SuiteReport {
            suite: self.suite.clone(),
            seed: plan.suite_seed,
            created_at: Utc::now(),
            sizes: plan.sizes.to_vec(),
            warmup: self.config.runner.effective_warmup(),
            samples: self.config.runner.effective_samples(),
            records,
            fits,
            regressions: Vec::new(),
        };

        self.compare_baseline(&mut report, &mut errors);

        if cancelled {
            info!(
                records = report.records.len(),
                "suite cancelled, returning partial results"
            );
            errors.push(HarnessError::Cancelled);
        }

        let duration_ms = started.elapsed().as_millis() as u64;
        self.dispatcher.emit_suite_completed(&SuiteCompletedEvent {
            suite: self.suite.clone(),
            cases: report.records.len(),
            duration_ms,
            error_count: errors.len(),
        });
        info!(
            suite = %self.suite,
            cases = report.records.len(),
            duration_ms,
            errors = errors.len(),
            "suite completed"
        );

        Ok(SuiteOutcome {
            data: report,
            errors,
        })
    }

    /// Measure one (unit, case) pair: warmup, then up to `samples` timed
    /// runs. Returns `None` when no sample was collected, either because
    /// the unit failed outright or cancellation hit before the first run.
    fn measure_case(
        &self,
        unit: &AnyAlgorithm,
        case: &GeneratedCase,
        errors: &mut Vec<HarnessError>,
    ) -> Option<CaseRecord> {
        let name = unit.name();
        let label = case.planned.label;
        let size = case.planned.size;
        let case_id = format!("{}/{}", label, size);

        self.dispatcher.emit_case_started(&CaseStartedEvent {
            algorithm: name.clone(),
            case: label.to_string(),
            size,
        });

        let warmup = self.config.runner.effective_warmup();
        let samples = self.config.runner.effective_samples();
        let limit = Duration::from_millis(self.config.runner.effective_sample_time_limit_ms());
        let meter = OpMeter::new();

        for _ in 0..warmup {
            if let Err(error) = self.run_once(unit, case, &case_id, &meter) {
                warn!(unit = %name, case = %case_id, error = %error, "unit failed during warmup");
                errors.push(error);
                return None;
            }
        }

        let mut collected: Vec<Sample> = Vec::with_capacity(samples as usize);
        let mut truncated = false;
        let mut failure_reported = false;

        for _ in 0..samples {
            if self.token.is_cancelled() {
                break;
            }
            match self.run_once(unit, case, &case_id, &meter) {
                Ok((sample, failure)) => {
                    if let Some(detail) = failure {
                        if !failure_reported {
                            warn!(unit = %name, case = %case_id, detail = %detail, "verification failed");
                            errors.push(
                                RunError::VerificationFailed {
                                    name: name.clone(),
                                    case: case_id.clone(),
                                    detail,
                                }
                                .into(),
                            );
                            failure_reported = true;
                        }
                    }
                    let over_limit = sample.duration > limit;
                    collected.push(sample);
                    if over_limit {
                        truncated = true;
                        debug!(unit = %name, case = %case_id, "sample time limit hit, truncating");
                        break;
                    }
                }
                Err(error) => {
                    warn!(unit = %name, case = %case_id, error = %error, "unit failed");
                    errors.push(error);
                    return None;
                }
            }
        }

        let verified = collected.iter().all(|s| s.verified);
        let stats = CaseStats::from_samples(&collected)?;
        let record = CaseRecord {
            algorithm: name.clone(),
            family: case.planned.family,
            case: label.to_string(),
            size,
            stats,
            verified,
            truncated,
        };

        self.dispatcher.emit_case_completed(&CaseCompletedEvent {
            algorithm: name,
            case: label.to_string(),
            size,
            median_ns: record.stats.median_ns,
            verified,
            truncated,
        });
        debug!(
            unit = %record.algorithm,
            case = %case_id,
            median_ns = record.stats.median_ns,
            verified,
            truncated,
            "case measured"
        );
        Some(record)
    }

    /// One run: clone the pristine input, reset the meter, time the unit,
    /// verify. The second tuple element carries the verification failure
    /// detail when the output was wrong.
    fn run_once(
        &self,
        unit: &AnyAlgorithm,
        case: &GeneratedCase,
        case_id: &str,
        meter: &OpMeter,
    ) -> Result<(Sample, Option<String>), HarnessError> {
        match (unit, &case.input) {
            (AnyAlgorithm::Sort(sort), CaseInput::Sort(workload)) => {
                let mut data = workload.data.clone();
                meter.reset();
                let start = Instant::now();
                let outcome = catch_unwind(AssertUnwindSafe(|| sort.sort(&mut data, meter)));
                let duration = start.elapsed();
                if let Err(payload) = outcome {
                    return Err(unit_panic(unit, case_id, payload));
                }
                let failure = verify::verify_sort(&workload.data, &data).err();
                Ok((sample_of(duration, meter, &failure), failure))
            }
            (AnyAlgorithm::Search(search), CaseInput::Search(workload)) => {
                let mut found: Vec<(i64, Option<usize>)> =
                    Vec::with_capacity(workload.targets.len());
                meter.reset();
                let start = Instant::now();
                let outcome = catch_unwind(AssertUnwindSafe(|| {
                    for &target in &workload.targets {
                        found.push((target, search.search(&workload.haystack, target, meter)));
                    }
                }));
                let duration = start.elapsed();
                if let Err(payload) = outcome {
                    return Err(unit_panic(unit, case_id, payload));
                }
                let mut failure = None;
                for (target, result) in found {
                    if let Err(detail) = verify::verify_search(&workload.haystack, target, result) {
                        failure = Some(detail);
                        break;
                    }
                }
                Ok((sample_of(duration, meter, &failure), failure))
            }
            (AnyAlgorithm::Graph(graph_unit), CaseInput::Graph(workload)) => {
                meter.reset();
                let start = Instant::now();
                let outcome = catch_unwind(AssertUnwindSafe(|| {
                    graph_unit.run(&workload.graph, workload.source, workload.target, meter)
                }));
                let duration = start.elapsed();
                match outcome {
                    Ok(result) => {
                        let failure = verify::verify_graph(
                            &workload.graph,
                            workload.source,
                            workload.target,
                            &result,
                        )
                        .err();
                        Ok((sample_of(duration, meter, &failure), failure))
                    }
                    Err(payload) => Err(unit_panic(unit, case_id, payload)),
                }
            }
            // Unreachable through run_suite, which pairs units with cases
            // of their own family.
            (unit, _) => Err(RegistryError::FamilyMismatch {
                name: unit.name(),
                expected: case.planned.family,
                actual: unit.family(),
            }
            .into()),
        }
    }

    /// Fit a complexity class per (unit, case label) series across sizes,
    /// on both the comparison-count and the median-time basis. Series
    /// shorter than the fit minimum produce no entry.
    fn fit_records(&self, records: &[CaseRecord]) -> Vec<ComplexityFit> {
        let mut order: Vec<(String, String)> = Vec::new();
        let mut series: FxHashMap<(String, String), Vec<(u64, f64, f64)>> = FxHashMap::default();
        for record in records {
            let key = (record.algorithm.clone(), record.case.clone());
            let entry = series.entry(key.clone()).or_insert_with(|| {
                order.push(key);
                Vec::new()
            });
            entry.push((
                record.size as u64,
                record.stats.comparisons as f64,
                record.stats.median_ns,
            ));
        }

        let mut fits = Vec::new();
        for key in order {
            let points = match series.get(&key) {
                Some(points) => points,
                None => continue,
            };
            let declared = match self.registry.get(&key.0) {
                Ok(unit) => unit.meta().profile.average,
                Err(_) => continue,
            };
            let comparison_points: Vec<FitPoint> = points
                .iter()
                .map(|&(n, comparisons, _)| FitPoint {
                    n,
                    value: comparisons,
                })
                .collect();
            if let Some(fit) = fit_case(
                &key.0,
                &key.1,
                FitBasis::Comparisons,
                comparison_points,
                declared,
            ) {
                fits.push(fit);
            }
            let time_points: Vec<FitPoint> = points
                .iter()
                .map(|&(n, _, median_ns)| FitPoint {
                    n,
                    value: median_ns,
                })
                .collect();
            if let Some(fit) = fit_case(&key.0, &key.1, FitBasis::MedianTime, time_points, declared)
            {
                fits.push(fit);
            }
        }
        fits
    }

    /// Compare against the configured baseline, when there is one. A
    /// baseline that cannot be read is a non-fatal error; the suite result
    /// simply carries no regressions.
    fn compare_baseline(&self, report: &mut SuiteReport, errors: &mut Vec<HarnessError>) {
        let path = match &self.config.report.baseline_path {
            Some(path) => path,
            None => return,
        };
        match SuiteReport::load_baseline(path) {
            Ok(baseline) => {
                let threshold = self.config.report.effective_regression_threshold();
                let regressions = compare_with_baseline(report, &baseline, threshold);
                for regression in &regressions {
                    warn!(
                        unit = %regression.algorithm,
                        case = %regression.case,
                        size = regression.size,
                        ratio = regression.ratio,
                        "performance regression"
                    );
                    self.dispatcher
                        .emit_regression_detected(&RegressionDetectedEvent {
                            algorithm: regression.algorithm.clone(),
                            case: regression.case.clone(),
                            size: regression.size,
                            baseline_median_ns: regression.baseline_median_ns,
                            current_median_ns: regression.current_median_ns,
                            ratio: regression.ratio,
                        });
                }
                report.regressions = regressions;
            }
            Err(error) => {
                warn!(error = %error, "baseline could not be loaded, skipping comparison");
                errors.push(error.into());
            }
        }
    }
}

fn sample_of(duration: Duration, meter: &OpMeter, failure: &Option<String>) -> Sample {
    Sample {
        duration,
        ops: meter.snapshot(),
        verified: failure.is_none(),
    }
}

fn unit_panic(unit: &AnyAlgorithm, case_id: &str, payload: Box<dyn Any + Send>) -> HarnessError {
    RunError::UnitPanic {
        name: unit.name(),
        case: case_id.to_string(),
        message: panic_message(payload),
    }
    .into()
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
