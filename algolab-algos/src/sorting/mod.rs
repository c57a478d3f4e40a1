//! Sorting units.
//!
//! Metering convention across all six: one comparison per element-vs-
//! element compare, two moves per swap (one per relocated element), one
//! move per shift or buffer write. Merge sort additionally reports its
//! scratch buffer through `record_aux_bytes`.

mod linearithmic;
mod quadratic;

pub use linearithmic::{HeapSort, MergeSort, QuickSort};
pub use quadratic::{BubbleSort, InsertionSort, SelectionSort};
