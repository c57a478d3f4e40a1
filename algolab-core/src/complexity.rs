//! Complexity classes and declared algorithm profiles.
//!
//! Units registered with the harness declare the textbook complexity of
//! their best/average/worst cases; the harness later fits an empirical
//! class to measured series and compares the two.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Asymptotic growth class, ordered from slowest-growing to fastest-growing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityClass {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    Quadratic,
    Cubic,
}

impl ComplexityClass {
    /// All classes, in growth order. The candidate set for empirical fitting.
    pub const ALL: [ComplexityClass; 6] = [
        Self::Constant,
        Self::Logarithmic,
        Self::Linear,
        Self::Linearithmic,
        Self::Quadratic,
        Self::Cubic,
    ];

    /// The model function f(n) for this class.
    ///
    /// Log terms clamp `n` to 1 so that `growth` never returns a
    /// non-positive or non-finite value for any `n`.
    pub fn growth(&self, n: u64) -> f64 {
        let n = n.max(1) as f64;
        match self {
            Self::Constant => 1.0,
            Self::Logarithmic => n.log2().max(1.0),
            Self::Linear => n,
            Self::Linearithmic => n * n.log2().max(1.0),
            Self::Quadratic => n * n,
            Self::Cubic => n * n * n,
        }
    }

    /// Big-O notation for display and reports.
    pub fn notation(&self) -> &'static str {
        match self {
            Self::Constant => "O(1)",
            Self::Logarithmic => "O(log n)",
            Self::Linear => "O(n)",
            Self::Linearithmic => "O(n log n)",
            Self::Quadratic => "O(n^2)",
            Self::Cubic => "O(n^3)",
        }
    }
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

/// Declared complexity of an algorithm unit, as found in the classical
/// literature: best/average/worst time, auxiliary space, and stability.
///
/// Stability is meaningful for sorts; search and graph units set it `true`
/// by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityProfile {
    pub best: ComplexityClass,
    pub average: ComplexityClass,
    pub worst: ComplexityClass,
    pub space: ComplexityClass,
    pub stable: bool,
}

impl ComplexityProfile {
    pub fn new(
        best: ComplexityClass,
        average: ComplexityClass,
        worst: ComplexityClass,
        space: ComplexityClass,
        stable: bool,
    ) -> Self {
        Self {
            best,
            average,
            worst,
            space,
            stable,
        }
    }

    /// A profile is well-formed when best ≤ average ≤ worst under the
    /// class growth order. Registries reject units that violate this.
    pub fn is_well_formed(&self) -> bool {
        self.best <= self.average && self.average <= self.worst
    }
}

/// The algorithm families the harness knows how to plan, run, and verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmFamily {
    Sort,
    Search,
    Graph,
}

impl AlgorithmFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sort => "sort",
            Self::Search => "search",
            Self::Graph => "graph",
        }
    }
}

impl fmt::Display for AlgorithmFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity and declared behavior of a registered unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmMeta {
    pub name: String,
    pub family: AlgorithmFamily,
    pub profile: ComplexityProfile,
}

impl AlgorithmMeta {
    pub fn new(
        name: impl Into<String>,
        family: AlgorithmFamily,
        profile: ComplexityProfile,
    ) -> Self {
        Self {
            name: name.into(),
            family,
            profile,
        }
    }
}
