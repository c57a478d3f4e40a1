//! Graph workload generation for traversal and shortest-path cases.

use petgraph::stable_graph::NodeIndex;

use algolab_core::collections::FxHashSet;
use algolab_core::SeededRng;

use super::GraphTopology;
use crate::contract::InputGraph;

/// Edge weights are drawn from this inclusive range. Strictly positive,
/// so Dijkstra's non-negativity requirement always holds.
pub const WEIGHT_MIN: u32 = 1;
pub const WEIGHT_MAX: u32 = 9;

/// A generated graph input with the endpoints every unit runs between.
#[derive(Debug, Clone)]
pub struct GraphWorkload {
    pub topology: GraphTopology,
    pub nodes: usize,
    pub seed: u64,
    pub graph: InputGraph,
    pub source: NodeIndex,
    pub target: NodeIndex,
}

/// Generate a graph of `nodes` nodes shaped by `topology`. Pure in its
/// arguments. `source` always reaches `target`.
pub fn generate_graph(
    topology: GraphTopology,
    nodes: usize,
    seed: u64,
    degree: usize,
) -> GraphWorkload {
    let mut rng = SeededRng::new(seed);
    let mut graph = InputGraph::with_capacity(nodes, nodes * degree);
    let indices: Vec<NodeIndex> = (0..nodes).map(|i| graph.add_node(i as u32)).collect();

    let weight = |rng: &mut SeededRng| {
        rng.next_range_i64(WEIGHT_MIN as i64, WEIGHT_MAX as i64) as u32
    };

    let (source, target) = match topology {
        GraphTopology::Path => {
            for pair in indices.windows(2) {
                let w = weight(&mut rng);
                graph.add_edge(pair[0], pair[1], w);
            }
            (indices[0], indices[nodes - 1])
        }
        GraphTopology::Grid => {
            // Row-major grid, edges both ways between lateral and vertical
            // neighbors. The last row may be ragged.
            let width = (nodes as f64).sqrt().floor().max(1.0) as usize;
            for (i, &node) in indices.iter().enumerate() {
                if (i + 1) % width != 0 && i + 1 < nodes {
                    let w = weight(&mut rng);
                    graph.add_edge(node, indices[i + 1], w);
                    let w = weight(&mut rng);
                    graph.add_edge(indices[i + 1], node, w);
                }
                if i + width < nodes {
                    let w = weight(&mut rng);
                    graph.add_edge(node, indices[i + width], w);
                    let w = weight(&mut rng);
                    graph.add_edge(indices[i + width], node, w);
                }
            }
            (indices[0], indices[nodes - 1])
        }
        GraphTopology::Random => {
            // Backbone first: a random permutation threaded as a path, so
            // the source end always reaches the target end.
            let mut order: Vec<usize> = (0..nodes).collect();
            rng.shuffle(&mut order);
            let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();
            for pair in order.windows(2) {
                let w = weight(&mut rng);
                graph.add_edge(indices[pair[0]], indices[pair[1]], w);
                seen.insert((pair[0], pair[1]));
            }

            // Expected-degree sprinkle: each ordered pair gets an edge
            // with probability degree/nodes.
            let p = degree as f64 / nodes as f64;
            for u in 0..nodes {
                for v in 0..nodes {
                    if u == v || seen.contains(&(u, v)) {
                        continue;
                    }
                    if rng.next_f64() < p {
                        let w = weight(&mut rng);
                        graph.add_edge(indices[u], indices[v], w);
                        seen.insert((u, v));
                    }
                }
            }
            (indices[order[0]], indices[order[nodes - 1]])
        }
    };

    GraphWorkload {
        topology,
        nodes,
        seed,
        graph,
        source,
        target,
    }
}
