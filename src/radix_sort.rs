//! Radix Sort Implementation
//!
//! LSD (Least Significant Digit) radix sort in base 10, using a stable
//! counting sort for each decimal digit position. Only non-negative values
//! are accepted.
//!
//! Complexity: O(n * k) where k = number of decimal digits in the maximum value,
//! O(n + 10) auxiliary space reused across passes.

use crate::error::SortError;

/// Decimal radix
const RADIX: u64 = 10;
/// One bucket per decimal digit
const NUM_BUCKETS: usize = RADIX as usize;

/// Sort a slice in-place using LSD base-10 radix sort.
///
/// Returns [`SortError::NegativeValue`] without touching the slice if any
/// element is negative.
pub fn sort(data: &mut [i64]) -> Result<(), SortError> {
    if let Some((index, &value)) = data.iter().enumerate().find(|&(_, &v)| v < 0) {
        return Err(SortError::NegativeValue { index, value });
    }
    sort_by_key(data, &|&value| value as u64);
    Ok(())
}

/// Radix sort ordered by a non-negative integer `key`. Stable.
pub(crate) fn sort_by_key<T, F>(data: &mut [T], key: &F)
where
    T: Clone,
    F: Fn(&T) -> u64,
{
    if data.is_empty() {
        return;
    }

    let max = data.iter().map(key).max().unwrap_or(0);
    let mut output = data.to_vec();

    // Process each digit position from least significant to most significant
    let mut exp = 1u64;
    while max / exp > 0 {
        counting_sort_by_digit(data, &mut output, exp, key);
        match exp.checked_mul(RADIX) {
            Some(next) => exp = next,
            None => break,
        }
    }
}

/// One stable counting-sort pass on the digit `(key / exp) % 10`.
///
/// `output` is scratch space of the same length as `data`; the sorted pass
/// is copied back into `data`.
pub(crate) fn counting_sort_by_digit<T, F>(data: &mut [T], output: &mut [T], exp: u64, key: &F)
where
    T: Clone,
    F: Fn(&T) -> u64,
{
    let digit = |item: &T| ((key(item) / exp) % RADIX) as usize;
    let mut count = [0usize; NUM_BUCKETS];

    // Build histogram (count occurrences of each digit)
    for item in data.iter() {
        count[digit(item)] += 1;
    }

    // Inclusive prefix sum: count[d] = number of elements with digit <= d
    for d in 1..NUM_BUCKETS {
        count[d] += count[d - 1];
    }

    // Scatter from the back so equal digits keep their relative order
    for item in data.iter().rev() {
        let d = digit(item);
        output[count[d] - 1] = item.clone();
        count[d] -= 1;
    }

    data.clone_from_slice(output);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_sorted;
    use rand::Rng;

    #[test]
    fn test_sort_empty() {
        let mut data: Vec<i64> = vec![];
        assert_eq!(sort(&mut data), Ok(()));
        assert!(data.is_empty());
    }

    #[test]
    fn test_sort_single() {
        let mut data = vec![42i64];
        sort(&mut data).unwrap();
        assert_eq!(data, vec![42]);
    }

    #[test]
    fn test_sort_example() {
        let mut data = vec![5, 3, 3, 1];
        sort(&mut data).unwrap();
        assert_eq!(data, vec![1, 3, 3, 5]);
    }

    #[test]
    fn test_sort_sorted() {
        let mut data: Vec<i64> = (0..100).collect();
        sort(&mut data).unwrap();
        assert_eq!(data, (0..100).collect::<Vec<i64>>());
    }

    #[test]
    fn test_sort_reverse() {
        let mut data: Vec<i64> = (0..100).rev().collect();
        sort(&mut data).unwrap();
        assert_eq!(data, (0..100).collect::<Vec<i64>>());
    }

    #[test]
    fn test_sort_all_zero() {
        let mut data = vec![0i64; 50];
        sort(&mut data).unwrap();
        assert!(data.iter().all(|&x| x == 0));
    }

    #[test]
    fn test_sort_duplicates() {
        let mut data = vec![5, 3, 5, 1, 3, 5, 1, 1];
        sort(&mut data).unwrap();
        assert_eq!(data, vec![1, 1, 1, 3, 3, 5, 5, 5]);
    }

    #[test]
    fn test_sort_mixed_digit_counts() {
        let mut data = vec![170, 45, 75, 90, 802, 24, 2, 66, 100_000, 9];
        sort(&mut data).unwrap();
        assert_eq!(data, vec![2, 9, 24, 45, 66, 75, 90, 170, 802, 100_000]);
    }

    #[test]
    fn test_sort_max_values() {
        let mut data = vec![i64::MAX, 0, i64::MAX / 2, 1, i64::MAX - 1];
        sort(&mut data).unwrap();
        assert_eq!(data, vec![0, 1, i64::MAX / 2, i64::MAX - 1, i64::MAX]);
    }

    #[test]
    fn test_sort_rejects_negative() {
        let mut data = vec![4, 2, -3, 1];
        assert_eq!(
            sort(&mut data),
            Err(SortError::NegativeValue { index: 2, value: -3 })
        );
        assert_eq!(data, vec![4, 2, -3, 1]);
    }

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<i64> = (0..100_000).map(|_| rng.gen_range(0..=100_000)).collect();
        let mut expected = data.clone();
        expected.sort();

        sort(&mut data).unwrap();
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }

    #[test]
    fn test_counting_pass_is_stable() {
        // units digit only: 21, 11, 31 all have digit 1
        let mut data: Vec<(u64, char)> = vec![(21, 'a'), (10, 'b'), (11, 'c'), (31, 'd'), (20, 'e')];
        let mut output = data.clone();
        counting_sort_by_digit(&mut data, &mut output, 1, &|&(key, _)| key);
        assert_eq!(data, vec![(10, 'b'), (20, 'e'), (21, 'a'), (11, 'c'), (31, 'd')]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<(u64, usize)> = (0..2000).map(|pos| (rng.gen_range(0..150), pos)).collect();

        sort_by_key(&mut data, &|&(key, _)| key);

        for w in data.windows(2) {
            assert!(w[0].0 < w[1].0 || (w[0].0 == w[1].0 && w[0].1 < w[1].1));
        }
    }
}
