//! Output verification against family oracles.
//!
//! Every measured run is checked, not sampled: a unit that returns wrong
//! results produces records flagged unverified plus a non-fatal error, and
//! its timings are not trusted as comparable.

use petgraph::algo::dijkstra;
use petgraph::stable_graph::NodeIndex;
use petgraph::visit::Bfs;

use rustc_hash::FxHashMap;

use crate::contract::{GraphOutcome, InputGraph};

/// A sorted output must be non-decreasing and a multiset permutation of
/// the input.
pub fn verify_sort(input: &[i64], output: &[i64]) -> Result<(), String> {
    if let Some(w) = output.windows(2).find(|w| w[0] > w[1]) {
        return Err(format!("output not sorted: {} precedes {}", w[0], w[1]));
    }
    if input.len() != output.len() {
        return Err(format!(
            "length changed: {} in, {} out",
            input.len(),
            output.len()
        ));
    }

    let mut counts: FxHashMap<i64, i64> = FxHashMap::default();
    for &v in input {
        *counts.entry(v).or_insert(0) += 1;
    }
    for &v in output {
        match counts.get_mut(&v) {
            Some(c) => *c -= 1,
            None => return Err(format!("output contains {} absent from input", v)),
        }
    }
    if counts.values().any(|&c| c != 0) {
        return Err("output is not a permutation of the input".to_string());
    }
    Ok(())
}

/// A search result must agree with a linear-scan ground truth.
pub fn verify_search(
    haystack: &[i64],
    target: i64,
    result: Option<usize>,
) -> Result<(), String> {
    match result {
        Some(i) => match haystack.get(i) {
            Some(&v) if v == target => Ok(()),
            Some(&v) => Err(format!(
                "index {} holds {}, expected target {}",
                i, v, target
            )),
            None => Err(format!("index {} out of bounds", i)),
        },
        None => {
            if haystack.contains(&target) {
                Err(format!("target {} present but reported absent", target))
            } else {
                Ok(())
            }
        }
    }
}

/// Count of nodes reachable from `source`, the visit-count oracle for
/// every graph unit.
pub fn reachable_count(graph: &InputGraph, source: NodeIndex) -> u64 {
    let mut bfs = Bfs::new(graph, source);
    let mut count = 0u64;
    while bfs.next(graph).is_some() {
        count += 1;
    }
    count
}

/// Shortest-path oracle distance from `source` to `target`.
pub fn oracle_distance(graph: &InputGraph, source: NodeIndex, target: NodeIndex) -> Option<u64> {
    let dist = dijkstra(graph, source, Some(target), |e| u64::from(*e.weight()));
    dist.get(&target).copied()
}

/// A graph outcome must visit exactly the reachable set, and any reported
/// distance must match the oracle.
pub fn verify_graph(
    graph: &InputGraph,
    source: NodeIndex,
    target: NodeIndex,
    outcome: &GraphOutcome,
) -> Result<(), String> {
    let expected_visited = reachable_count(graph, source);
    if outcome.visited != expected_visited {
        return Err(format!(
            "visited {} nodes, {} reachable",
            outcome.visited, expected_visited
        ));
    }
    if let Some(dist) = outcome.dist {
        match oracle_distance(graph, source, target) {
            Some(expected) if expected == dist => {}
            Some(expected) => {
                return Err(format!("distance {} but oracle found {}", dist, expected));
            }
            None => {
                return Err(format!("distance {} to an unreachable target", dist));
            }
        }
    }
    Ok(())
}
