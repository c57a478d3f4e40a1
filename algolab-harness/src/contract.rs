//! Contract traits every pluggable algorithm unit implements.
//!
//! Units are object-safe, `Send + Sync`, and held as `Arc<dyn _>` so packs
//! can assemble registries from units they do not own. The harness hands
//! every run an [`OpMeter`]; a unit that does not meter still gets timed,
//! but its complexity fit will fall back to wall-clock time.

use std::sync::Arc;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;

use algolab_core::{AlgorithmFamily, AlgorithmMeta, OpMeter};

/// The graph shape all graph units run on: directed, `u32` node payloads,
/// strictly positive `u32` edge weights.
pub type InputGraph = StableGraph<u32, u32, Directed>;

/// A sorting unit. `sort` must leave `data` ascending; the harness
/// verifies both ordering and that the output is a permutation of the
/// input.
pub trait SortAlgorithm: Send + Sync {
    fn meta(&self) -> AlgorithmMeta;

    fn sort(&self, data: &mut [i64], meter: &OpMeter);
}

/// A searching unit. Haystacks arrive sorted ascending; a returned index
/// `i` must satisfy `haystack[i] == target`. With duplicate elements any
/// matching index is accepted.
pub trait SearchAlgorithm: Send + Sync {
    fn meta(&self) -> AlgorithmMeta;

    fn search(&self, haystack: &[i64], target: i64, meter: &OpMeter) -> Option<usize>;
}

/// What a graph unit reports back from one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphOutcome {
    /// Nodes the unit visited (settled or expanded).
    pub visited: u64,
    /// Weighted source→target distance, when the unit computes one.
    pub dist: Option<u64>,
    /// Node count of the reported path, when the unit reconstructs one.
    pub path_len: Option<usize>,
}

/// A graph unit: traversal or shortest path over an [`InputGraph`].
pub trait GraphAlgorithm: Send + Sync {
    fn meta(&self) -> AlgorithmMeta;

    fn run(
        &self,
        graph: &InputGraph,
        source: NodeIndex,
        target: NodeIndex,
        meter: &OpMeter,
    ) -> GraphOutcome;
}

/// A registered unit of any family.
#[derive(Clone)]
pub enum AnyAlgorithm {
    Sort(Arc<dyn SortAlgorithm>),
    Search(Arc<dyn SearchAlgorithm>),
    Graph(Arc<dyn GraphAlgorithm>),
}

impl AnyAlgorithm {
    pub fn meta(&self) -> AlgorithmMeta {
        match self {
            Self::Sort(unit) => unit.meta(),
            Self::Search(unit) => unit.meta(),
            Self::Graph(unit) => unit.meta(),
        }
    }

    pub fn family(&self) -> AlgorithmFamily {
        match self {
            Self::Sort(_) => AlgorithmFamily::Sort,
            Self::Search(_) => AlgorithmFamily::Search,
            Self::Graph(_) => AlgorithmFamily::Graph,
        }
    }

    pub fn name(&self) -> String {
        self.meta().name
    }
}

impl std::fmt::Debug for AnyAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let meta = self.meta();
        f.debug_struct("AnyAlgorithm")
            .field("name", &meta.name)
            .field("family", &meta.family)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algolab_core::{ComplexityClass, ComplexityProfile};

    struct NoopSort;

    impl SortAlgorithm for NoopSort {
        fn meta(&self) -> AlgorithmMeta {
            AlgorithmMeta::new(
                "noop_sort",
                AlgorithmFamily::Sort,
                ComplexityProfile::new(
                    ComplexityClass::Constant,
                    ComplexityClass::Constant,
                    ComplexityClass::Constant,
                    ComplexityClass::Constant,
                    true,
                ),
            )
        }

        fn sort(&self, _data: &mut [i64], _meter: &OpMeter) {}
    }

    #[test]
    fn any_algorithm_reports_family_and_name() {
        let unit = AnyAlgorithm::Sort(Arc::new(NoopSort));
        assert_eq!(unit.family(), AlgorithmFamily::Sort);
        assert_eq!(unit.name(), "noop_sort");
        assert_eq!(unit.meta().profile.best, ComplexityClass::Constant);
    }

    #[test]
    fn traits_are_object_safe() {
        fn assert_dyn(_: &dyn SortAlgorithm, _: &dyn SearchAlgorithm, _: &dyn GraphAlgorithm) {}
        let _ = assert_dyn;
    }
}
