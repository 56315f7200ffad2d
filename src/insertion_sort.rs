//! Insertion Sort Implementation
//!
//! Stable, in-place. Each element is lifted out as the key, larger elements
//! before it shift one slot right, and the key drops into the gap.
//!
//! Complexity: O(n²) worst/average (descending input), O(n) best (already
//! sorted), O(1) extra space.

/// Sort a slice in-place using insertion sort.
pub fn sort(data: &mut [i64]) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
}
