//! Searching units, plus the classic two-sum routine.
//!
//! Haystacks arrive sorted ascending from the workload generator; linear
//! search does not rely on that, binary search does.

use std::cmp::Ordering;

use algolab_core::collections::FxHashMap;
use algolab_core::{
    AlgorithmFamily, AlgorithmMeta, ComplexityClass, ComplexityProfile, OpMeter,
};
use algolab_harness::contract::SearchAlgorithm;

/// Front-to-back scan. The baseline every other search is measured
/// against.
pub struct LinearSearch;

impl SearchAlgorithm for LinearSearch {
    fn meta(&self) -> AlgorithmMeta {
        AlgorithmMeta::new(
            "linear_search",
            AlgorithmFamily::Search,
            ComplexityProfile::new(
                ComplexityClass::Constant,
                ComplexityClass::Linear,
                ComplexityClass::Linear,
                ComplexityClass::Constant,
                true,
            ),
        )
    }

    fn search(&self, haystack: &[i64], target: i64, meter: &OpMeter) -> Option<usize> {
        for (i, &value) in haystack.iter().enumerate() {
            meter.record_comparison();
            if value == target {
                return Some(i);
            }
        }
        None
    }
}

/// Iterative binary search over a half-open window, with the
/// overflow-safe midpoint `low + (high - low) / 2`.
pub struct BinarySearch;

impl SearchAlgorithm for BinarySearch {
    fn meta(&self) -> AlgorithmMeta {
        AlgorithmMeta::new(
            "binary_search",
            AlgorithmFamily::Search,
            ComplexityProfile::new(
                ComplexityClass::Constant,
                ComplexityClass::Logarithmic,
                ComplexityClass::Logarithmic,
                ComplexityClass::Constant,
                true,
            ),
        )
    }

    fn search(&self, haystack: &[i64], target: i64, meter: &OpMeter) -> Option<usize> {
        let mut low = 0;
        let mut high = haystack.len();
        while low < high {
            let mid = low + (high - low) / 2;
            meter.record_comparison();
            match haystack[mid].cmp(&target) {
                Ordering::Equal => return Some(mid),
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
            }
        }
        None
    }
}

/// Indices `(i, j)` with `i < j` of the first pair summing to `target`,
/// in scan order. Single pass with a complement map: one comparison per
/// probe, one move per insertion.
///
/// This routine does not fit the [`SearchAlgorithm`] contract (it
/// returns a pair, not a position), so it ships as a plain function
/// rather than a registrable unit.
pub fn two_sum(haystack: &[i64], target: i64, meter: &OpMeter) -> Option<(usize, usize)> {
    let mut seen: FxHashMap<i64, usize> = FxHashMap::default();
    for (i, &value) in haystack.iter().enumerate() {
        // A complement that overflows i64 cannot be present anyway.
        if let Some(complement) = target.checked_sub(value) {
            meter.record_comparison();
            if let Some(&j) = seen.get(&complement) {
                return Some((j, i));
            }
        }
        seen.entry(value).or_insert(i);
        meter.record_move();
    }
    None
}
