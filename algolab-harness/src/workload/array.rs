//! Array workload generation for sorting and searching cases.

use algolab_core::SeededRng;

use super::ArrayPattern;

/// Number of targets probed per search run. Half are present in the
/// haystack, half are guaranteed absent.
pub const SEARCH_TARGETS: usize = 16;

/// A generated array input for sorting units.
#[derive(Debug, Clone)]
pub struct ArrayWorkload {
    pub pattern: ArrayPattern,
    pub size: usize,
    pub seed: u64,
    pub data: Vec<i64>,
}

/// A generated input for searching units: a sorted haystack and a batch
/// of targets mixing hits and guaranteed misses.
#[derive(Debug, Clone)]
pub struct SearchCase {
    pub size: usize,
    pub seed: u64,
    pub haystack: Vec<i64>,
    pub targets: Vec<i64>,
}

/// Generate an array of `size` values in `[value_min, value_max]`
/// shaped by `pattern`. Pure in its arguments.
pub fn generate_array(
    pattern: ArrayPattern,
    size: usize,
    seed: u64,
    value_min: i64,
    value_max: i64,
) -> ArrayWorkload {
    let mut rng = SeededRng::new(seed);
    let mut data: Vec<i64> = (0..size)
        .map(|_| rng.next_range_i64(value_min, value_max))
        .collect();

    match pattern {
        ArrayPattern::Random => {}
        ArrayPattern::Sorted => data.sort_unstable(),
        ArrayPattern::Reversed => {
            data.sort_unstable();
            data.reverse();
        }
        ArrayPattern::NearlySorted => {
            data.sort_unstable();
            if size >= 2 {
                // A 5% sprinkle of adjacent swaps keeps the array almost
                // ordered without collapsing to the sorted case.
                let swaps = (size / 20).max(1);
                for _ in 0..swaps {
                    let i = rng.next_below(size - 1);
                    data.swap(i, i + 1);
                }
            }
        }
        ArrayPattern::FewUnique => {
            let mut keys = [0i64; 8];
            for key in &mut keys {
                *key = rng.next_range_i64(value_min, value_max);
            }
            for slot in &mut data {
                *slot = keys[rng.next_below(keys.len())];
            }
        }
    }

    ArrayWorkload {
        pattern,
        size,
        seed,
        data,
    }
}

/// Generate a search case: sorted haystack of `size` values plus
/// [`SEARCH_TARGETS`] probes. Absent probes sit above `value_max`, so
/// they can never collide with generated values.
pub fn generate_search_case(
    size: usize,
    seed: u64,
    value_min: i64,
    value_max: i64,
) -> SearchCase {
    let mut rng = SeededRng::new(seed);
    let mut haystack: Vec<i64> = (0..size)
        .map(|_| rng.next_range_i64(value_min, value_max))
        .collect();
    haystack.sort_unstable();

    let mut targets = Vec::with_capacity(SEARCH_TARGETS);
    for i in 0..SEARCH_TARGETS {
        if i % 2 == 0 && !haystack.is_empty() {
            targets.push(haystack[rng.next_below(haystack.len())]);
        } else {
            let offset = rng.next_range_i64(1, 1000);
            targets.push(value_max.saturating_add(offset));
        }
    }

    SearchCase {
        size,
        seed,
        haystack,
        targets,
    }
}
