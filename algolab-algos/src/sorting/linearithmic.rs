//! The O(n log n) sorts.

use algolab_core::{
    AlgorithmFamily, AlgorithmMeta, ComplexityClass, ComplexityProfile, OpMeter,
};
use algolab_harness::contract::SortAlgorithm;

/// Top-down merge sort with a single scratch buffer allocated up front
/// and reported as auxiliary space.
pub struct MergeSort;

impl SortAlgorithm for MergeSort {
    fn meta(&self) -> AlgorithmMeta {
        AlgorithmMeta::new(
            "merge_sort",
            AlgorithmFamily::Sort,
            ComplexityProfile::new(
                ComplexityClass::Linearithmic,
                ComplexityClass::Linearithmic,
                ComplexityClass::Linearithmic,
                ComplexityClass::Linear,
                true,
            ),
        )
    }

    fn sort(&self, data: &mut [i64], meter: &OpMeter) {
        if data.len() <= 1 {
            return;
        }
        let mut scratch = vec![0i64; data.len()];
        meter.record_aux_bytes((data.len() * std::mem::size_of::<i64>()) as u64);
        merge_sort_recursive(data, &mut scratch, meter);
    }
}

fn merge_sort_recursive(data: &mut [i64], scratch: &mut [i64], meter: &OpMeter) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    let mid = n / 2;
    {
        let (left, right) = data.split_at_mut(mid);
        let (scratch_left, scratch_right) = scratch.split_at_mut(mid);
        merge_sort_recursive(left, scratch_left, meter);
        merge_sort_recursive(right, scratch_right, meter);
    }
    merge_halves(data, mid, scratch, meter);
}

/// Merge `data[..mid]` and `data[mid..]` through `scratch`, taking from
/// the left run on ties to keep the sort stable.
fn merge_halves(data: &mut [i64], mid: usize, scratch: &mut [i64], meter: &OpMeter) {
    let n = data.len();
    let mut left = 0;
    let mut right = mid;
    for slot in scratch[..n].iter_mut() {
        let take_left = if left >= mid {
            false
        } else if right >= n {
            true
        } else {
            meter.record_comparison();
            data[left] <= data[right]
        };
        *slot = if take_left {
            let value = data[left];
            left += 1;
            value
        } else {
            let value = data[right];
            right += 1;
            value
        };
        meter.record_move();
    }
    data.copy_from_slice(&scratch[..n]);
    meter.record_moves(n as u64);
}

/// Quicksort with a median-of-three pivot and Hoare-style partitioning.
/// Recurses into the smaller partition and iterates on the larger, so
/// stack depth stays logarithmic even on adversarial inputs.
pub struct QuickSort;

impl SortAlgorithm for QuickSort {
    fn meta(&self) -> AlgorithmMeta {
        AlgorithmMeta::new(
            "quick_sort",
            AlgorithmFamily::Sort,
            ComplexityProfile::new(
                ComplexityClass::Linearithmic,
                ComplexityClass::Linearithmic,
                ComplexityClass::Quadratic,
                ComplexityClass::Logarithmic,
                false,
            ),
        )
    }

    fn sort(&self, data: &mut [i64], meter: &OpMeter) {
        quicksort(data, meter);
    }
}

fn quicksort(mut data: &mut [i64], meter: &OpMeter) {
    loop {
        match data.len() {
            0 | 1 => return,
            2 => {
                meter.record_comparison();
                if data[0] > data[1] {
                    data.swap(0, 1);
                    meter.record_moves(2);
                }
                return;
            }
            _ => {}
        }

        let split = partition(data, meter);
        let (left, right) = data.split_at_mut(split + 1);
        if left.len() <= right.len() {
            quicksort(left, meter);
            data = right;
        } else {
            quicksort(right, meter);
            data = left;
        }
    }
}

/// Hoare partition around the median of first, middle, and last.
///
/// The three sampled positions are sorted in place first, so
/// `data[0] <= pivot <= data[hi]` holds on entry to the scans. That
/// bounds both scans and guarantees the returned split leaves two
/// non-empty partitions for any slice of length >= 3.
fn partition(data: &mut [i64], meter: &OpMeter) -> usize {
    let hi = data.len() - 1;
    let mid = data.len() / 2;
    order_pair(data, 0, mid, meter);
    order_pair(data, 0, hi, meter);
    order_pair(data, mid, hi, meter);
    let pivot = data[mid];

    let mut i = 0;
    let mut j = hi;
    loop {
        loop {
            meter.record_comparison();
            if data[i] >= pivot {
                break;
            }
            i += 1;
        }
        loop {
            meter.record_comparison();
            if data[j] <= pivot {
                break;
            }
            j -= 1;
        }
        if i >= j {
            return j;
        }
        data.swap(i, j);
        meter.record_moves(2);
        i += 1;
        j -= 1;
    }
}

fn order_pair(data: &mut [i64], a: usize, b: usize, meter: &OpMeter) {
    meter.record_comparison();
    if data[a] > data[b] {
        data.swap(a, b);
        meter.record_moves(2);
    }
}

/// In-place heapsort: build a max-heap by sifting down from the last
/// parent, then repeatedly swap the root to the shrinking tail.
pub struct HeapSort;

impl SortAlgorithm for HeapSort {
    fn meta(&self) -> AlgorithmMeta {
        AlgorithmMeta::new(
            "heap_sort",
            AlgorithmFamily::Sort,
            ComplexityProfile::new(
                ComplexityClass::Linearithmic,
                ComplexityClass::Linearithmic,
                ComplexityClass::Linearithmic,
                ComplexityClass::Constant,
                false,
            ),
        )
    }

    fn sort(&self, data: &mut [i64], meter: &OpMeter) {
        let n = data.len();
        if n <= 1 {
            return;
        }
        for root in (0..n / 2).rev() {
            sift_down(data, root, n, meter);
        }
        for end in (1..n).rev() {
            data.swap(0, end);
            meter.record_moves(2);
            sift_down(data, 0, end, meter);
        }
    }
}

fn sift_down(data: &mut [i64], mut root: usize, end: usize, meter: &OpMeter) {
    loop {
        let left = 2 * root + 1;
        if left >= end {
            return;
        }
        let mut child = left;
        let right = left + 1;
        if right < end {
            meter.record_comparison();
            if data[right] > data[left] {
                child = right;
            }
        }
        meter.record_comparison();
        if data[root] >= data[child] {
            return;
        }
        data.swap(root, child);
        meter.record_moves(2);
        root = child;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(unit: &dyn SortAlgorithm, mut data: Vec<i64>) -> (Vec<i64>, algolab_core::OpSnapshot) {
        let meter = OpMeter::new();
        unit.sort(&mut data, &meter);
        (data, meter.snapshot())
    }

    fn units() -> [(&'static str, &'static dyn SortAlgorithm); 3] {
        [
            ("merge_sort", &MergeSort),
            ("quick_sort", &QuickSort),
            ("heap_sort", &HeapSort),
        ]
    }

    #[test]
    fn all_three_sort_scrambled_input() {
        let input = vec![9, -4, 2, 2, 0, 17, -4, 5, 1, 1, 1, 30];
        let mut expected = input.clone();
        expected.sort_unstable();

        for (name, unit) in units() {
            let (sorted, _) = run(unit, input.clone());
            assert_eq!(sorted, expected, "{name}");
        }
    }

    #[test]
    fn degenerate_inputs_sort_cleanly() {
        for (name, unit) in units() {
            for input in [vec![], vec![3], vec![2, 1], vec![5, 5, 5, 5]] {
                let mut expected = input.clone();
                expected.sort_unstable();
                let (sorted, _) = run(unit, input);
                assert_eq!(sorted, expected, "{name}");
            }
        }
    }

    #[test]
    fn sorted_and_reversed_inputs_stay_linearithmic() {
        // Median-of-three keeps quicksort off its quadratic worst case on
        // ordered input. The ceiling sits a little above heapsort's
        // 2n*log2(n) bound at n = 1024; a quadratic sort would need ~524k.
        let ceiling: u64 = 24_000;
        for (name, unit) in units() {
            for input in [
                (0..1024).collect::<Vec<i64>>(),
                (0..1024).rev().collect::<Vec<i64>>(),
            ] {
                let (sorted, ops) = run(unit, input);
                assert!(sorted.windows(2).all(|w| w[0] <= w[1]), "{name}");
                assert!(
                    ops.comparisons < ceiling,
                    "{name}: {} comparisons",
                    ops.comparisons
                );
            }
        }
    }

    #[test]
    fn merge_reports_its_scratch_buffer() {
        let (_, ops) = run(&MergeSort, (0..256).rev().collect());
        assert_eq!(ops.aux_bytes, 256 * 8);

        let (_, ops) = run(&QuickSort, (0..256).rev().collect());
        assert_eq!(ops.aux_bytes, 0);
    }

    /// Distribute sorted values so every merge interleaves maximally:
    /// even-indexed values go to the left half, odd-indexed to the right,
    /// recursively.
    fn merge_adversary(values: &[i64]) -> Vec<i64> {
        if values.len() <= 1 {
            return values.to_vec();
        }
        let evens: Vec<i64> = values.iter().copied().step_by(2).collect();
        let odds: Vec<i64> = values.iter().copied().skip(1).step_by(2).collect();
        let mut out = merge_adversary(&evens);
        out.extend(merge_adversary(&odds));
        out
    }

    #[test]
    fn merge_comparison_count_matches_the_recurrence_worst_case() {
        // For a power-of-two n the adversarial permutation costs exactly
        // n*log2(n) - n + 1 comparisons: 49 at n = 16.
        let input = merge_adversary(&(0..16).collect::<Vec<i64>>());
        let (sorted, ops) = run(&MergeSort, input);
        assert_eq!(sorted, (0..16).collect::<Vec<i64>>());
        assert_eq!(ops.comparisons, 49);
    }

    #[test]
    fn quick_handles_all_equal_without_blowup() {
        let (sorted, ops) = run(&QuickSort, vec![7; 512]);
        assert!(sorted.iter().all(|&v| v == 7));
        // Hoare partitioning splits equal runs near the middle, so the
        // comparison count stays well under the quadratic 512*511/2.
        assert!(ops.comparisons < 20_000, "{}", ops.comparisons);
    }

    #[test]
    fn heap_comparisons_grow_linearithmically() {
        let (_, small) = run(&HeapSort, (0..128).rev().collect());
        let (_, large) = run(&HeapSort, (0..1024).rev().collect());
        // 8x the elements should cost roughly 8 * (10/7)x the work, far
        // below the 64x a quadratic sort would show.
        let ratio = large.comparisons as f64 / small.comparisons as f64;
        assert!(ratio < 16.0, "ratio {ratio}");
    }
}
