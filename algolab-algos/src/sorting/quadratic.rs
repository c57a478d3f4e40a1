//! The elementary O(n^2) sorts.

use algolab_core::{
    AlgorithmFamily, AlgorithmMeta, ComplexityClass, ComplexityProfile, OpMeter,
};
use algolab_harness::contract::SortAlgorithm;

/// Bubble sort with the early-exit optimization: a swap-free pass means
/// the array is sorted, which makes the best case linear.
pub struct BubbleSort;

impl SortAlgorithm for BubbleSort {
    fn meta(&self) -> AlgorithmMeta {
        AlgorithmMeta::new(
            "bubble_sort",
            AlgorithmFamily::Sort,
            ComplexityProfile::new(
                ComplexityClass::Linear,
                ComplexityClass::Quadratic,
                ComplexityClass::Quadratic,
                ComplexityClass::Constant,
                true,
            ),
        )
    }

    fn sort(&self, data: &mut [i64], meter: &OpMeter) {
        let n = data.len();
        for pass in 0..n {
            let mut swapped = false;
            for j in 0..n - pass - 1 {
                meter.record_comparison();
                if data[j] > data[j + 1] {
                    data.swap(j, j + 1);
                    meter.record_moves(2);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
    }
}

/// Insertion sort. Shifts rather than swaps: each displaced element
/// records one move, plus one for the final key write.
pub struct InsertionSort;

impl SortAlgorithm for InsertionSort {
    fn meta(&self) -> AlgorithmMeta {
        AlgorithmMeta::new(
            "insertion_sort",
            AlgorithmFamily::Sort,
            ComplexityProfile::new(
                ComplexityClass::Linear,
                ComplexityClass::Quadratic,
                ComplexityClass::Quadratic,
                ComplexityClass::Constant,
                true,
            ),
        )
    }

    fn sort(&self, data: &mut [i64], meter: &OpMeter) {
        for i in 1..data.len() {
            let key = data[i];
            let mut j = i;
            while j > 0 {
                meter.record_comparison();
                if data[j - 1] <= key {
                    break;
                }
                data[j] = data[j - 1];
                meter.record_move();
                j -= 1;
            }
            if j != i {
                data[j] = key;
                meter.record_move();
            }
        }
    }
}

/// Selection sort. Exactly n(n-1)/2 comparisons on every input, which
/// makes its comparison series a textbook quadratic.
pub struct SelectionSort;

impl SortAlgorithm for SelectionSort {
    fn meta(&self) -> AlgorithmMeta {
        AlgorithmMeta::new(
            "selection_sort",
            AlgorithmFamily::Sort,
            ComplexityProfile::new(
                ComplexityClass::Quadratic,
                ComplexityClass::Quadratic,
                ComplexityClass::Quadratic,
                ComplexityClass::Constant,
                false,
            ),
        )
    }

    fn sort(&self, data: &mut [i64], meter: &OpMeter) {
        let n = data.len();
        for i in 0..n {
            let mut min = i;
            for j in i + 1..n {
                meter.record_comparison();
                if data[j] < data[min] {
                    min = j;
                }
            }
            if min != i {
                data.swap(i, min);
                meter.record_moves(2);
            }
        }
    }
}
