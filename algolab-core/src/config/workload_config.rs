//! Workload configuration.

use serde::{Deserialize, Serialize};

/// Configuration for workload generation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Input sizes for array cases. Default: [100, 1000, 5000].
    #[serde(default)]
    pub sizes: Vec<usize>,
    /// Smallest generated element value (inclusive). Default: 1.
    pub value_min: Option<i64>,
    /// Largest generated element value (inclusive). Default: 10_000.
    pub value_max: Option<i64>,
    /// Array pattern names to generate (snake_case). Empty = all patterns.
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Node counts for graph cases. Default: [64, 256, 1024].
    #[serde(default)]
    pub graph_nodes: Vec<usize>,
    /// Target out-degree for random graph topologies. Default: 4.
    pub graph_degree: Option<usize>,
}

impl WorkloadConfig {
    /// Returns the effective input sizes, defaulting to [100, 1000, 5000].
    pub fn effective_sizes(&self) -> Vec<usize> {
        if self.sizes.is_empty() {
            vec![100, 1000, 5000]
        } else {
            self.sizes.clone()
        }
    }

    /// Returns the effective minimum element value, defaulting to 1.
    pub fn effective_value_min(&self) -> i64 {
        self.value_min.unwrap_or(1)
    }

    /// Returns the effective maximum element value, defaulting to 10_000.
    pub fn effective_value_max(&self) -> i64 {
        self.value_max.unwrap_or(10_000)
    }

    /// Returns the effective graph node counts, defaulting to [64, 256, 1024].
    pub fn effective_graph_nodes(&self) -> Vec<usize> {
        if self.graph_nodes.is_empty() {
            vec![64, 256, 1024]
        } else {
            self.graph_nodes.clone()
        }
    }

    /// Returns the effective graph degree, defaulting to 4.
    pub fn effective_graph_degree(&self) -> usize {
        self.graph_degree.unwrap_or(4)
    }
}
