//! Dijkstra shortest path over positively weighted graphs.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use petgraph::stable_graph::NodeIndex;
use petgraph::visit::EdgeRef;

use algolab_core::collections::{FxHashMap, FxHashSet};
use algolab_core::{
    AlgorithmFamily, AlgorithmMeta, ComplexityClass, ComplexityProfile, OpMeter,
};
use algolab_harness::contract::{GraphAlgorithm, GraphOutcome, InputGraph};

/// Binary-heap Dijkstra. Settles every node reachable from the source,
/// then reports the weighted distance to the target and the node count
/// of one shortest path, reconstructed from predecessor links.
///
/// Metering: one comparison per heap pop, one move per relaxation that
/// improves a tentative distance.
pub struct Dijkstra;

impl GraphAlgorithm for Dijkstra {
    fn meta(&self) -> AlgorithmMeta {
        AlgorithmMeta::new(
            "dijkstra",
            AlgorithmFamily::Graph,
            ComplexityProfile::new(
                ComplexityClass::Linearithmic,
                ComplexityClass::Linearithmic,
                ComplexityClass::Linearithmic,
                ComplexityClass::Linear,
                true,
            ),
        )
    }

    fn run(
        &self,
        graph: &InputGraph,
        source: NodeIndex,
        target: NodeIndex,
        meter: &OpMeter,
    ) -> GraphOutcome {
        let mut dist: FxHashMap<NodeIndex, u64> = FxHashMap::default();
        let mut prev: FxHashMap<NodeIndex, NodeIndex> = FxHashMap::default();
        let mut settled: FxHashSet<NodeIndex> = FxHashSet::default();
        let mut heap = BinaryHeap::new();

        dist.insert(source, 0);
        heap.push(HeapEntry {
            cost: 0,
            node: source,
        });

        while let Some(HeapEntry { cost, node }) = heap.pop() {
            meter.record_comparison();
            if !settled.insert(node) {
                // A stale entry; this node already settled at a lower cost.
                continue;
            }
            for edge in graph.edges(node) {
                let next = edge.target();
                if settled.contains(&next) {
                    continue;
                }
                let next_cost = cost + u64::from(*edge.weight());
                let improves = dist.get(&next).map(|&known| next_cost < known).unwrap_or(true);
                if improves {
                    dist.insert(next, next_cost);
                    prev.insert(next, node);
                    meter.record_move();
                    heap.push(HeapEntry {
                        cost: next_cost,
                        node: next,
                    });
                }
            }
        }

        let dist_to_target = dist.get(&target).copied();
        let path_len = dist_to_target.map(|_| {
            let mut len = 1;
            let mut cursor = target;
            while let Some(&parent) = prev.get(&cursor) {
                len += 1;
                cursor = parent;
            }
            len
        });

        GraphOutcome {
            visited: settled.len() as u64,
            dist: dist_to_target,
            path_len,
        }
    }
}

/// Priority-queue entry ordered for a min-heap: lower cost pops first,
/// ties broken by node index so pop order is fully deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    cost: u64,
    node: NodeIndex,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.index().cmp(&self.node.index()))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
