//! Deterministic workload planning and generation.
//! Same config + seed, byte-identical workloads, across runs and platforms.

pub mod array;
pub mod graph;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use algolab_core::collections::SizeVec;
use algolab_core::config::HarnessConfig;
use algolab_core::errors::WorkloadError;
use algolab_core::AlgorithmFamily;

pub use array::{ArrayWorkload, SearchCase};
pub use graph::GraphWorkload;

/// Input shape for array cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayPattern {
    Random,
    Sorted,
    Reversed,
    NearlySorted,
    FewUnique,
}

impl ArrayPattern {
    pub const ALL: [ArrayPattern; 5] = [
        Self::Random,
        Self::Sorted,
        Self::Reversed,
        Self::NearlySorted,
        Self::FewUnique,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::Reversed => "reversed",
            Self::NearlySorted => "nearly_sorted",
            Self::FewUnique => "few_unique",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

/// Topology for graph cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphTopology {
    Path,
    Grid,
    Random,
}

impl GraphTopology {
    pub const ALL: [GraphTopology; 3] = [Self::Path, Self::Grid, Self::Random];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Grid => "grid",
            Self::Random => "random",
        }
    }
}

/// One planned case before generation: which input to build, at which
/// size, from which derived seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCase {
    pub family: AlgorithmFamily,
    /// Pattern or topology label; doubles as the case label in records.
    pub label: &'static str,
    pub size: usize,
    pub seed: u64,
}

impl PlannedCase {
    /// Stable identifier: `family/label/size`. Seeds derive from it, so a
    /// case's input never depends on which other cases are planned.
    pub fn key(family: AlgorithmFamily, label: &str, size: usize) -> String {
        format!("{}/{}/{}", family, label, size)
    }
}

/// A generated input ready to measure.
#[derive(Debug, Clone)]
pub enum CaseInput {
    Sort(ArrayWorkload),
    Search(SearchCase),
    Graph(GraphWorkload),
}

/// A planned case together with its generated input.
#[derive(Debug, Clone)]
pub struct GeneratedCase {
    pub planned: PlannedCase,
    pub input: CaseInput,
}

/// The full expansion of a config into concrete cases.
///
/// Sort cases are sizes × patterns; search cases run over sorted
/// haystacks per size; graph cases are node counts × topologies. All
/// units of a family at the same case see the identical input.
#[derive(Debug, Clone)]
pub struct WorkloadPlan {
    pub sizes: SizeVec,
    pub patterns: Vec<ArrayPattern>,
    pub graph_nodes: SizeVec,
    pub topologies: Vec<GraphTopology>,
    pub value_min: i64,
    pub value_max: i64,
    pub graph_degree: usize,
    pub suite_seed: u64,
    cases: Vec<PlannedCase>,
}

impl WorkloadPlan {
    /// Expand `config` into planned cases.
    pub fn from_config(config: &HarnessConfig) -> Result<Self, WorkloadError> {
        let sizes: SizeVec = config.workload.effective_sizes().into_iter().collect();
        if sizes.is_empty() {
            return Err(WorkloadError::EmptySizes);
        }
        let value_min = config.workload.effective_value_min();
        let value_max = config.workload.effective_value_max();
        if value_min > value_max {
            return Err(WorkloadError::InvalidRange {
                min: value_min,
                max: value_max,
            });
        }

        let patterns = if config.workload.patterns.is_empty() {
            ArrayPattern::ALL.to_vec()
        } else {
            config
                .workload
                .patterns
                .iter()
                .map(|name| {
                    ArrayPattern::from_label(name)
                        .ok_or_else(|| WorkloadError::UnknownPattern(name.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        let graph_nodes: SizeVec = config.workload.effective_graph_nodes().into_iter().collect();
        for &nodes in &graph_nodes {
            if nodes < 2 {
                return Err(WorkloadError::GraphTooSmall { nodes });
            }
        }
        let graph_degree = config.workload.effective_graph_degree();
        if let Some(&min_nodes) = graph_nodes.iter().min() {
            if graph_degree >= min_nodes {
                return Err(WorkloadError::DegreeTooHigh {
                    degree: graph_degree,
                    nodes: min_nodes,
                });
            }
        }

        let suite_seed = config.effective_seed();
        let mut cases = Vec::new();

        for &size in &sizes {
            for pattern in &patterns {
                cases.push(Self::plan_case(
                    AlgorithmFamily::Sort,
                    pattern.label(),
                    size,
                    suite_seed,
                ));
            }
        }
        for &size in &sizes {
            cases.push(Self::plan_case(
                AlgorithmFamily::Search,
                ArrayPattern::Sorted.label(),
                size,
                suite_seed,
            ));
        }
        for &nodes in &graph_nodes {
            for topology in GraphTopology::ALL {
                cases.push(Self::plan_case(
                    AlgorithmFamily::Graph,
                    topology.label(),
                    nodes,
                    suite_seed,
                ));
            }
        }

        Ok(Self {
            sizes,
            patterns,
            graph_nodes,
            topologies: GraphTopology::ALL.to_vec(),
            value_min,
            value_max,
            graph_degree,
            suite_seed,
            cases,
        })
    }

    fn plan_case(
        family: AlgorithmFamily,
        label: &'static str,
        size: usize,
        suite_seed: u64,
    ) -> PlannedCase {
        let key = PlannedCase::key(family, label, size);
        PlannedCase {
            family,
            label,
            size,
            seed: algolab_core::rng::derive_seed(suite_seed, &key),
        }
    }

    /// Planned cases in deterministic order: sorts, then searches, then
    /// graphs, each in config order.
    pub fn cases(&self) -> &[PlannedCase] {
        &self.cases
    }

    /// Planned cases for one family.
    pub fn cases_for(&self, family: AlgorithmFamily) -> impl Iterator<Item = &PlannedCase> {
        self.cases.iter().filter(move |c| c.family == family)
    }

    /// Generate the input for one planned case.
    pub fn generate(&self, case: &PlannedCase) -> GeneratedCase {
        let input = match case.family {
            AlgorithmFamily::Sort => {
                // Planned labels always come from ArrayPattern::label.
                let pattern = ArrayPattern::from_label(case.label).unwrap_or(ArrayPattern::Random);
                CaseInput::Sort(array::generate_array(
                    pattern,
                    case.size,
                    case.seed,
                    self.value_min,
                    self.value_max,
                ))
            }
            AlgorithmFamily::Search => CaseInput::Search(array::generate_search_case(
                case.size,
                case.seed,
                self.value_min,
                self.value_max,
            )),
            AlgorithmFamily::Graph => {
                let topology = GraphTopology::ALL
                    .into_iter()
                    .find(|t| t.label() == case.label)
                    .unwrap_or(GraphTopology::Random);
                CaseInput::Graph(graph::generate_graph(
                    topology,
                    case.size,
                    case.seed,
                    self.graph_degree,
                ))
            }
        };
        GeneratedCase {
            planned: case.clone(),
            input,
        }
    }

    /// Generate every planned case sequentially.
    pub fn build(&self) -> Vec<GeneratedCase> {
        self.cases.iter().map(|c| self.generate(c)).collect()
    }

    /// Generate every planned case in parallel. Order matches [`cases`]
    /// regardless of scheduling.
    pub fn build_parallel(&self) -> Vec<GeneratedCase> {
        self.cases.par_iter().map(|c| self.generate(c)).collect()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
