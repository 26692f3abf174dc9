//! In-place sorts and slice searches over any totally ordered element type.
pub mod search;
pub mod sort;

pub use search::{binary_search, linear_search};
pub use sort::{bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, selection_sort};
