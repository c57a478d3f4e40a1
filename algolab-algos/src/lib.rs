//! # algolab-algos
//!
//! The built-in algorithm unit pack: classical sorting, searching, and
//! graph algorithms implementing the `algolab-harness` contracts, each
//! metering its element comparisons and moves and declaring its textbook
//! complexity profile.
//!
//! [`register_builtins`] wires all eleven units into a registry and is
//! the supported way to assemble the standard suite:
//!
//! ```
//! use algolab_algos::register_builtins;
//! use algolab_harness::Registry;
//!
//! let mut registry = Registry::new();
//! register_builtins(&mut registry).unwrap();
//! assert_eq!(registry.len(), 11);
//! ```

pub mod graph;
pub mod searching;
pub mod sorting;

pub use graph::{BreadthFirst, DepthFirst, Dijkstra};
pub use searching::{two_sum, BinarySearch, LinearSearch};
pub use sorting::{BubbleSort, HeapSort, InsertionSort, MergeSort, QuickSort, SelectionSort};

use std::sync::Arc;

use algolab_core::errors::RegistryError;
use algolab_harness::Registry;

/// Register every built-in unit: six sorts, two searches, three graph
/// algorithms. Fails on a name collision with units already registered.
pub fn register_builtins(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register_sort(Arc::new(BubbleSort))?;
    registry.register_sort(Arc::new(InsertionSort))?;
    registry.register_sort(Arc::new(SelectionSort))?;
    registry.register_sort(Arc::new(MergeSort))?;
    registry.register_sort(Arc::new(QuickSort))?;
    registry.register_sort(Arc::new(HeapSort))?;
    registry.register_search(Arc::new(LinearSearch))?;
    registry.register_search(Arc::new(BinarySearch))?;
    registry.register_graph(Arc::new(BreadthFirst))?;
    registry.register_graph(Arc::new(DepthFirst))?;
    registry.register_graph(Arc::new(Dijkstra))?;
    Ok(())
}
