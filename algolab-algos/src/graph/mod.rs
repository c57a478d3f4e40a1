//! Graph units.
//!
//! All three run over the harness [`InputGraph`] shape: directed, with
//! strictly positive `u32` edge weights. Each reports how many nodes it
//! visited; a unit's visit count must cover the full set reachable from
//! the source, which is what the harness verifies it against.
//!
//! [`InputGraph`]: algolab_harness::contract::InputGraph

mod shortest_path;
mod traversal;

pub use shortest_path::Dijkstra;
pub use traversal::{BreadthFirst, DepthFirst};
