//! Search Implementations
//!
//! Linear search scans from the front and makes no assumption about order.
//! Binary search halves an ascending slice each step.
//!
//! Complexity: linear O(n), binary O(log n); both O(1) extra space.

use crate::error::SearchError;

/// Return the index of the first element equal to `target`.
pub fn linear_search(data: &[i64], target: i64) -> Option<usize> {
    for (i, &value) in data.iter().enumerate() {
        if value == target {
            return Some(i);
        }
    }
    None
}

/// Return an index of `target` in an ascending slice.
///
/// The slice must be sorted ascending. This is not checked; on unsorted
/// input the result is meaningless but the call still terminates. With
/// duplicates, any matching index may be returned.
pub fn binary_search(data: &[i64], target: i64) -> Option<usize> {
    if data.is_empty() {
        return None;
    }

    let mut low = 0usize;
    let mut high = data.len() - 1;

    while low <= high {
        let mid = (low + high) / 2;
        let value = data[mid];
        if value == target {
            return Some(mid);
        } else if value < target {
            low = mid + 1;
        } else {
            // high would go below low = 0
            if mid == 0 {
                break;
            }
            high = mid - 1;
        }
    }
    None
}

/// Binary search that first verifies the ascending-order precondition.
pub fn binary_search_checked(data: &[i64], target: i64) -> Result<Option<usize>, SearchError> {
    if let Some(index) = data.windows(2).position(|w| w[0] > w[1]) {
        return Err(SearchError::Unsorted { index: index + 1 });
    }
    Ok(binary_search(data, target))
}
