use algolab_core::OpMeter;
use algolab_harness::{SearchAlgorithm, SortAlgorithm};
use proptest::collection::vec;
use proptest::prelude::*;

use algolab_algos::{
    two_sum, BinarySearch, BubbleSort, HeapSort, InsertionSort, MergeSort, QuickSort,
    SelectionSort,
};

fn sorters() -> Vec<Box<dyn SortAlgorithm>> {
    vec![
        Box::new(BubbleSort),
        Box::new(InsertionSort),
        Box::new(SelectionSort),
        Box::new(MergeSort),
        Box::new(QuickSort),
        Box::new(HeapSort),
    ]
}

proptest! {
    #[test]
    fn every_sort_agrees_with_the_standard_library(
        data in vec(any::<i64>(), 0..200),
        idx in 0..6usize,
    ) {
        let units = sorters();
        let unit = &units[idx];
        let mut expected = data.clone();
        expected.sort_unstable();

        let mut output = data;
        unit.sort(&mut output, &OpMeter::new());
        prop_assert_eq!(
            &output,
            &expected,
            "{} produced a wrong ordering",
            unit.meta().name
        );
    }
}

proptest! {
    #[test]
    fn binary_search_agrees_with_a_linear_scan(
        mut haystack in vec(-500i64..500, 0..300),
        target in -600i64..600,
    ) {
        haystack.sort_unstable();
        let result = BinarySearch.search(&haystack, target, &OpMeter::new());
        prop_assert_eq!(result.is_some(), haystack.contains(&target));
        if let Some(i) = result {
            prop_assert_eq!(haystack[i], target);
        }
    }
}

proptest! {
    #[test]
    fn two_sum_is_sound_and_complete(
        data in vec(-1000i64..1000, 0..100),
        target in -2500i64..2500,
    ) {
        match two_sum(&data, target, &OpMeter::new()) {
            Some((i, j)) => {
                prop_assert!(i < j, "indices out of order: ({}, {})", i, j);
                prop_assert!(j < data.len());
                prop_assert_eq!(data[i] + data[j], target);
            }
            None => {
                let exists = (0..data.len()).any(|i| {
                    (i + 1..data.len()).any(|j| data[i] + data[j] == target)
                });
                prop_assert!(!exists, "a pair summing to {} was missed", target);
            }
        }
    }
}

proptest! {
    #[test]
    fn quadratic_sorts_never_exceed_the_pairwise_bound(
        data in vec(any::<i64>(), 0..150),
    ) {
        let n = data.len() as u64;
        let bound = n.saturating_mul(n.saturating_sub(1)) / 2;

        for unit in [
            Box::new(BubbleSort) as Box<dyn SortAlgorithm>,
            Box::new(InsertionSort),
        ] {
            let meter = OpMeter::new();
            let mut copy = data.clone();
            unit.sort(&mut copy, &meter);
            let comparisons = meter.snapshot().comparisons;
            prop_assert!(
                comparisons <= bound,
                "{}: {} comparisons at n={}, bound {}",
                unit.meta().name,
                comparisons,
                n,
                bound
            );
        }
    }
}

proptest! {
    #[test]
    fn binary_search_probes_stay_logarithmic(
        mut haystack in vec(any::<i64>(), 1..2000),
        target in any::<i64>(),
    ) {
        haystack.sort_unstable();
        let meter = OpMeter::new();
        BinarySearch.search(&haystack, target, &meter);
        let bound = (haystack.len() as f64).log2().floor() as u64 + 1;
        prop_assert!(
            meter.snapshot().comparisons <= bound,
            "{} probes into {} elements",
            meter.snapshot().comparisons,
            haystack.len()
        );
    }
}
