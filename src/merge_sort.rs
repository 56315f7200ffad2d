//! Merge Sort Implementation
//!
//! Recursive top-down merge sort. Each call copies its two halves into fresh
//! vectors, sorts them, and merges them back into the caller's slice. The
//! merge takes from the left half on ties, so the sort is stable.
//!
//! Complexity: O(n log n) in every case, O(n) auxiliary space per level.

/// Sort a slice in-place using merge sort.
pub fn sort(data: &mut [i64]) {
    sort_by_key(data, &|&value| value);
}

/// Merge sort ordered by `key`. Elements with equal keys keep their order.
pub(crate) fn sort_by_key<T, K, F>(data: &mut [T], key: &F)
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    if data.len() <= 1 {
        return;
    }

    let mid = data.len() / 2;
    let mut left = data[..mid].to_vec();
    let mut right = data[mid..].to_vec();

    sort_by_key(&mut left, key);
    sort_by_key(&mut right, key);

    merge(&left, &right, data, key);
}

/// Merge two sorted runs into `out`, which must hold exactly both.
fn merge<T, K, F>(left: &[T], right: &[T], out: &mut [T], key: &F)
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < left.len() && j < right.len() {
        if key(&left[i]) <= key(&right[j]) {
            out[k] = left[i].clone();
            i += 1;
        } else {
            out[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }

    for item in &left[i..] {
        out[k] = item.clone();
        k += 1;
    }
    for item in &right[j..] {
        out[k] = item.clone();
        k += 1;
    }
}
