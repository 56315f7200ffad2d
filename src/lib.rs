//! Search and Sort Timing Benchmark
//!
//! Times two search algorithms and three sort algorithms over a series of
//! input sizes, then reports and charts the measurements:
//! - **Linear Search**: O(n)
//! - **Binary Search**: O(log n), ascending input only
//! - **Insertion Sort**: O(n²) worst case, O(n) best case
//! - **Merge Sort**: O(n log n)
//! - **Radix Sort**: O(nk), LSD base 10, non-negative input only
//!
//! All sorts work in place on `i64` slices.

pub mod benchmark;
pub mod chart;
pub mod config;
pub mod error;
pub mod insertion_sort;
pub mod menu;
pub mod merge_sort;
pub mod radix_sort;
pub mod report;
pub mod search;

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
