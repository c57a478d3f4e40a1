//! Breadth-first and depth-first traversal units.

use std::collections::VecDeque;

use petgraph::stable_graph::NodeIndex;

use algolab_core::collections::FxHashSet;
use algolab_core::{
    AlgorithmFamily, AlgorithmMeta, ComplexityClass, ComplexityProfile, OpMeter,
};
use algolab_harness::contract::{GraphAlgorithm, GraphOutcome, InputGraph};

/// Breadth-first traversal. Visits the full reachable set and reports
/// the hop count to the target as a path length (`hops + 1` nodes);
/// hop counts ignore weights, so no weighted distance is claimed.
pub struct BreadthFirst;

impl GraphAlgorithm for BreadthFirst {
    fn meta(&self) -> AlgorithmMeta {
        AlgorithmMeta::new(
            "bfs",
            AlgorithmFamily::Graph,
            ComplexityProfile::new(
                ComplexityClass::Linear,
                ComplexityClass::Linear,
                ComplexityClass::Linear,
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
        let mut seen: FxHashSet<NodeIndex> = FxHashSet::default();
        let mut queue: VecDeque<(NodeIndex, usize)> = VecDeque::new();
        seen.insert(source);
        queue.push_back((source, 0));

        let mut visited = 0u64;
        let mut target_hops = None;
        while let Some((node, hops)) = queue.pop_front() {
            visited += 1;
            meter.record_comparison();
            if node == target {
                target_hops = Some(hops);
            }
            for neighbor in graph.neighbors(node) {
                if seen.insert(neighbor) {
                    queue.push_back((neighbor, hops + 1));
                    meter.record_move();
                }
            }
        }

        GraphOutcome {
            visited,
            dist: None,
            path_len: target_hops.map(|hops| hops + 1),
        }
    }
}

/// Iterative depth-first traversal with an explicit stack. Pure reach
/// analysis: it reports the visit count and nothing about the target.
pub struct DepthFirst;

impl GraphAlgorithm for DepthFirst {
    fn meta(&self) -> AlgorithmMeta {
        AlgorithmMeta::new(
            "dfs",
            AlgorithmFamily::Graph,
            ComplexityProfile::new(
                ComplexityClass::Linear,
                ComplexityClass::Linear,
                ComplexityClass::Linear,
                ComplexityClass::Linear,
                true,
            ),
        )
    }

    fn run(
        &self,
        graph: &InputGraph,
        source: NodeIndex,
        _target: NodeIndex,
        meter: &OpMeter,
    ) -> GraphOutcome {
        let mut seen: FxHashSet<NodeIndex> = FxHashSet::default();
        let mut stack = vec![source];
        seen.insert(source);

        let mut visited = 0u64;
        while let Some(node) = stack.pop() {
            visited += 1;
            meter.record_comparison();
            for neighbor in graph.neighbors(node) {
                if seen.insert(neighbor) {
                    stack.push(neighbor);
                    meter.record_move();
                }
            }
        }

        GraphOutcome {
            visited,
            dist: None,
            path_len: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// a -> b -> c -> d plus a shortcut a -> c; e is disconnected.
    fn diamond() -> (InputGraph, NodeIndex, NodeIndex) {
        let mut graph = InputGraph::default();
        let a = graph.add_node(0);
        let b = graph.add_node(1);
        let c = graph.add_node(2);
        let d = graph.add_node(3);
        let _e = graph.add_node(4);
        graph.add_edge(a, b, 1);
        graph.add_edge(b, c, 1);
        graph.add_edge(c, d, 1);
        graph.add_edge(a, c, 5);
        (graph, a, d)
    }

    #[test]
    fn bfs_visits_the_reachable_set_only() {
        let (graph, source, target) = diamond();
        let outcome = BreadthFirst.run(&graph, source, target, &OpMeter::new());
        assert_eq!(outcome.visited, 4);
        assert_eq!(outcome.dist, None);
    }

    #[test]
    fn bfs_reports_the_fewest_hops_to_the_target() {
        let (graph, source, _) = diamond();
        // a -> c directly beats a -> b -> c: two nodes on the path.
        let c = graph
            .node_indices()
            .find(|&n| graph[n] == 2)
            .unwrap();
        let outcome = BreadthFirst.run(&graph, source, c, &OpMeter::new());
        assert_eq!(outcome.path_len, Some(2));
    }

    #[test]
    fn bfs_unreachable_target_has_no_path() {
        let (graph, source, _) = diamond();
        let e = graph
            .node_indices()
            .find(|&n| graph[n] == 4)
            .unwrap();
        let outcome = BreadthFirst.run(&graph, source, e, &OpMeter::new());
        assert_eq!(outcome.path_len, None);
        assert_eq!(outcome.visited, 4);
    }

    #[test]
    fn dfs_counts_exactly_the_reachable_nodes() {
        let (graph, source, target) = diamond();
        let outcome = DepthFirst.run(&graph, source, target, &OpMeter::new());
        assert_eq!(outcome.visited, 4);
        assert_eq!(outcome.dist, None);
        assert_eq!(outcome.path_len, None);
    }

    #[test]
    fn single_node_graph_traverses_itself() {
        let mut graph = InputGraph::default();
        let only = graph.add_node(0);
        for unit in [&BreadthFirst as &dyn GraphAlgorithm, &DepthFirst] {
            let outcome = unit.run(&graph, only, only, &OpMeter::new());
            assert_eq!(outcome.visited, 1);
        }
        // Source equals target: a path of one node, zero hops.
        let outcome = BreadthFirst.run(&graph, only, only, &OpMeter::new());
        assert_eq!(outcome.path_len, Some(1));
    }

    #[test]
    fn cycles_do_not_revisit_nodes() {
        let mut graph = InputGraph::default();
        let a = graph.add_node(0);
        let b = graph.add_node(1);
        let c = graph.add_node(2);
        graph.add_edge(a, b, 1);
        graph.add_edge(b, c, 1);
        graph.add_edge(c, a, 1);
        for unit in [&BreadthFirst as &dyn GraphAlgorithm, &DepthFirst] {
            let outcome = unit.run(&graph, a, c, &OpMeter::new());
            assert_eq!(outcome.visited, 3);
        }
    }
}
