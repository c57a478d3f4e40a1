//! Empirical complexity fitting over measured size series.
//!
//! Declared profiles say what a unit should do; this module checks what it
//! actually did. For every candidate class the model `y = a * f(n)` is
//! fitted by least squares through the origin, and the class with the
//! smallest mean relative residual wins. Operation counts are the primary
//! basis: they are deterministic, so three sizes are enough to separate
//! O(n log n) from O(n^2) cleanly, where wall-clock time at small n is
//! mostly noise.

use serde::{Deserialize, Serialize};

use algolab_core::ComplexityClass;

/// Minimum distinct sizes before a fit is attempted.
pub const MIN_FIT_POINTS: usize = 3;

/// Which measured series a fit was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitBasis {
    Comparisons,
    MedianTime,
}

/// One observation: input size and the measured value at that size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitPoint {
    pub n: u64,
    pub value: f64,
}

/// The winning class for one (algorithm, case label) series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityFit {
    pub algorithm: String,
    pub case: String,
    pub basis: FitBasis,
    pub class: ComplexityClass,
    /// Mean relative residual of the winning class. Lower is better;
    /// 0.0 is a perfect fit.
    pub score: f64,
    pub points: Vec<FitPoint>,
    /// The unit's declared average class, carried for reporting.
    /// `None` for time-basis fits.
    pub declared: Option<ComplexityClass>,
    /// Whether the comparison-basis winner equals the declared average
    /// class. `None` for time-basis fits.
    pub matches_declared: Option<bool>,
}

/// Fit `points` against every candidate class and return the winner,
/// or `None` when there are fewer than [`MIN_FIT_POINTS`] usable points.
pub fn fit_series(points: &[FitPoint]) -> Option<(ComplexityClass, f64)> {
    let usable: Vec<FitPoint> = points
        .iter()
        .filter(|p| p.n >= 1 && p.value.is_finite() && p.value >= 0.0)
        .copied()
        .collect();
    if usable.len() < MIN_FIT_POINTS {
        return None;
    }

    // An all-zero series carries no growth signal; call it constant.
    if usable.iter().all(|p| p.value == 0.0) {
        return Some((ComplexityClass::Constant, 0.0));
    }

    let mut best: Option<(ComplexityClass, f64)> = None;
    for class in ComplexityClass::ALL {
        let Some(score) = score_class(class, &usable) else {
            continue;
        };
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((class, score)),
        }
    }
    best
}

/// Least squares through the origin for `y = a * f(n)`, scored by mean
/// relative residual. Returns `None` when intermediates go non-finite.
fn score_class(class: ComplexityClass, points: &[FitPoint]) -> Option<f64> {
    let mut num = 0.0f64;
    let mut den = 0.0f64;
    for p in points {
        let f = class.growth(p.n);
        num += p.value * f;
        den += f * f;
    }
    if !num.is_finite() || !den.is_finite() || den <= 0.0 {
        return None;
    }
    let a = num / den;
    if !a.is_finite() {
        return None;
    }

    let mut residual_sum = 0.0f64;
    for p in points {
        let predicted = a * class.growth(p.n);
        let scale = p.value.abs().max(1.0);
        residual_sum += (p.value - predicted).abs() / scale;
    }
    let score = residual_sum / points.len() as f64;
    score.is_finite().then_some(score)
}

/// Fit one series and package it with identity and the declared-class
/// verdict (comparison basis only).
pub fn fit_case(
    algorithm: &str,
    case: &str,
    basis: FitBasis,
    points: Vec<FitPoint>,
    declared_average: ComplexityClass,
) -> Option<ComplexityFit> {
    let (class, score) = fit_series(&points)?;
    let (declared, matches_declared) = match basis {
        FitBasis::Comparisons => (Some(declared_average), Some(class == declared_average)),
        FitBasis::MedianTime => (None, None),
    };
    Some(ComplexityFit {
        algorithm: algorithm.to_string(),
        case: case.to_string(),
        basis,
        class,
        score,
        points,
        declared,
        matches_declared,
    })
}
