//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec sized for workload size lists (usually <8 sizes).
pub type SizeVec = SmallVec<[usize; 8]>;
