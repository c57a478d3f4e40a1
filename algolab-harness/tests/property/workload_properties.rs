//! Property tests for workload generation invariants.
//!
//! Fuzz-verifies, for arbitrary seeds and sizes:
//!   - generated arrays keep their configured length and value bounds
//!   - shaped patterns hold their shape (sorted, reversed, few-unique)
//!   - nearly-sorted stays within its inversion budget
//!   - search cases mix guaranteed hits with guaranteed misses
//!   - every graph topology connects source to target

use proptest::prelude::*;

use petgraph::algo::has_path_connecting;

use algolab_core::SeededRng;
use algolab_harness::workload::array::{generate_array, generate_search_case, SEARCH_TARGETS};
use algolab_harness::workload::graph::generate_graph;
use algolab_harness::workload::{ArrayPattern, GraphTopology};

fn any_pattern() -> impl Strategy<Value = ArrayPattern> {
    prop::sample::select(ArrayPattern::ALL.to_vec())
}

fn any_topology() -> impl Strategy<Value = GraphTopology> {
    prop::sample::select(GraphTopology::ALL.to_vec())
}

proptest! {
    #[test]
    fn arrays_keep_length_and_bounds(
        pattern in any_pattern(),
        size in 0usize..300,
        seed in any::<u64>(),
        min in -1_000i64..1_000,
        span in 0i64..2_000,
    ) {
        let max = min + span;
        let workload = generate_array(pattern, size, seed, min, max);
        prop_assert_eq!(workload.data.len(), size);
        prop_assert!(
            workload.data.iter().all(|v| (min..=max).contains(v)),
            "values escaped [{}, {}]", min, max
        );
    }

    #[test]
    fn generation_is_a_pure_function_of_its_arguments(
        pattern in any_pattern(),
        size in 0usize..200,
        seed in any::<u64>(),
    ) {
        let a = generate_array(pattern, size, seed, 1, 10_000);
        let b = generate_array(pattern, size, seed, 1, 10_000);
        prop_assert_eq!(a.data, b.data);
    }

    #[test]
    fn sorted_and_reversed_hold_their_order(size in 0usize..300, seed in any::<u64>()) {
        let sorted = generate_array(ArrayPattern::Sorted, size, seed, 1, 10_000);
        prop_assert!(sorted.data.windows(2).all(|w| w[0] <= w[1]));

        let reversed = generate_array(ArrayPattern::Reversed, size, seed, 1, 10_000);
        prop_assert!(reversed.data.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn nearly_sorted_respects_its_inversion_budget(
        size in 2usize..500,
        seed in any::<u64>(),
    ) {
        let workload = generate_array(ArrayPattern::NearlySorted, size, seed, 1, 10_000);
        let inversions = workload.data.windows(2).filter(|w| w[0] > w[1]).count();
        let budget = (size / 20).max(1);
        prop_assert!(
            inversions <= budget,
            "{} inversions exceed budget {} at size {}", inversions, budget, size
        );
    }

    #[test]
    fn few_unique_never_exceeds_its_key_count(size in 0usize..500, seed in any::<u64>()) {
        let workload = generate_array(ArrayPattern::FewUnique, size, seed, 1, 10_000);
        let mut distinct = workload.data;
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert!(distinct.len() <= 8);
    }

    #[test]
    fn patterns_produce_a_multiset_of_in_range_values(
        pattern in any_pattern(),
        size in 1usize..200,
        seed in any::<u64>(),
    ) {
        // Shaping reorders or re-draws values; it never changes the length
        // and never manufactures values outside the configured range.
        let workload = generate_array(pattern, size, seed, -50, 50);
        prop_assert_eq!(workload.data.len(), size);
        prop_assert!(workload.data.iter().all(|v| (-50..=50).contains(v)));
    }

    #[test]
    fn search_cases_mix_hits_and_guaranteed_misses(
        size in 1usize..300,
        seed in any::<u64>(),
    ) {
        let case = generate_search_case(size, seed, 1, 10_000);
        prop_assert_eq!(case.haystack.len(), size);
        prop_assert_eq!(case.targets.len(), SEARCH_TARGETS);
        prop_assert!(case.haystack.windows(2).all(|w| w[0] <= w[1]));

        for (i, target) in case.targets.iter().enumerate() {
            if i % 2 == 0 {
                prop_assert!(
                    case.haystack.binary_search(target).is_ok(),
                    "even-indexed target {} missing from haystack", target
                );
            } else {
                prop_assert!(
                    *target > 10_000,
                    "odd-indexed target {} is not a guaranteed miss", target
                );
            }
        }
    }

    #[test]
    fn every_topology_connects_source_to_target(
        topology in any_topology(),
        nodes in 2usize..80,
        seed in any::<u64>(),
        degree in 1usize..4,
    ) {
        let workload = generate_graph(topology, nodes, seed, degree);
        prop_assert_eq!(workload.graph.node_count(), nodes);
        prop_assert!(
            has_path_connecting(&workload.graph, workload.source, workload.target, None),
            "{:?} with seed {} lost its source-target path", topology, seed
        );
    }

    #[test]
    fn shuffle_preserves_the_multiset(
        mut data in prop::collection::vec(any::<i64>(), 0..100),
        seed in any::<u64>(),
    ) {
        let mut original = data.clone();
        let mut rng = SeededRng::new(seed);
        rng.shuffle(&mut data);

        original.sort_unstable();
        data.sort_unstable();
        prop_assert_eq!(original, data);
    }
}
