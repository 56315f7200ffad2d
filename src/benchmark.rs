//! Benchmark Driver
//!
//! Runs every algorithm once per input size and records how long each call
//! took. Search inputs are the sorted sequence `0..size` with the last element
//! as target, which is the worst case for linear search. Sort inputs are
//! `size` random values in `[0, size]`, cloned once per sort so every sort
//! sees the same values.

use std::hint::black_box;
use std::time::Instant;

use rand::Rng;
use serde::Serialize;

use crate::error::ConfigError;
use crate::{insertion_sort, is_sorted, merge_sort, radix_sort, search};

/// Input sizes benchmarked by default
pub const DEFAULT_INPUT_SIZES: [usize; 6] = [10, 100, 1000, 5000, 10000, 20000];

/// The ordered list of input sizes a run iterates over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InputSizes(Vec<usize>);

impl InputSizes {
    pub fn new(sizes: Vec<usize>) -> Result<Self, ConfigError> {
        if sizes.is_empty() {
            return Err(ConfigError::NoInputSizes);
        }
        Ok(InputSizes(sizes))
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for InputSizes {
    fn default() -> Self {
        InputSizes(DEFAULT_INPUT_SIZES.to_vec())
    }
}

/// The five benchmarked algorithms, in report column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    LinearSearch,
    BinarySearch,
    InsertionSort,
    MergeSort,
    RadixSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::LinearSearch,
        Algorithm::BinarySearch,
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::RadixSort,
    ];

    pub const SEARCHES: [Algorithm; 2] = [Algorithm::LinearSearch, Algorithm::BinarySearch];

    pub const SORTS: [Algorithm; 3] = [
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::RadixSort,
    ];

    /// Display name, e.g. "Linear Search"
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "Linear Search",
            Algorithm::BinarySearch => "Binary Search",
            Algorithm::InsertionSort => "Insertion Sort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::RadixSort => "Radix Sort",
        }
    }

    /// Column label, e.g. "Linear"
    pub fn short_name(self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "Linear",
            Algorithm::BinarySearch => "Binary",
            Algorithm::InsertionSort => "Insertion",
            Algorithm::MergeSort => "Merge",
            Algorithm::RadixSort => "Radix",
        }
    }

    pub fn time_complexity(self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "O(n)",
            Algorithm::BinarySearch => "O(log n)",
            Algorithm::InsertionSort => "O(n^2) worst case, O(n) best case",
            Algorithm::MergeSort => "O(n log n) in all cases",
            Algorithm::RadixSort => "O(nk), where k is number of digits",
        }
    }

    pub fn space_complexity(self) -> &'static str {
        match self {
            Algorithm::LinearSearch | Algorithm::BinarySearch | Algorithm::InsertionSort => "O(1)",
            Algorithm::MergeSort => "O(n) (needs temporary arrays)",
            Algorithm::RadixSort => "O(n + k) (needs counting/output arrays)",
        }
    }
}

/// One timed invocation of one algorithm at one input size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingSample {
    pub algorithm: Algorithm,
    pub input_size: usize,
    /// Wall-clock time of the single call, in seconds
    pub elapsed_secs: f64,
    /// Whether the algorithm's output was checked correct after timing
    pub verified: bool,
}

/// All samples of a run, grouped per input size in [`Algorithm::ALL`] order.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkRun {
    input_sizes: InputSizes,
    samples: Vec<TimingSample>,
}

impl BenchmarkRun {
    pub fn input_sizes(&self) -> &[usize] {
        self.input_sizes.as_slice()
    }

    pub fn samples(&self) -> &[TimingSample] {
        &self.samples
    }

    /// Elapsed seconds of `algorithm`, one entry per input size.
    pub fn series(&self, algorithm: Algorithm) -> Vec<f64> {
        self.samples
            .iter()
            .filter(|s| s.algorithm == algorithm)
            .map(|s| s.elapsed_secs)
            .collect()
    }

    /// One `(input_size, samples)` pair per benchmarked size, in run order.
    ///
    /// Rows are positional, so a size listed twice yields two rows.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[TimingSample])> {
        self.input_sizes
            .as_slice()
            .iter()
            .copied()
            .zip(self.samples.chunks(Algorithm::ALL.len()))
    }

    #[cfg(test)]
    pub(crate) fn from_parts(input_sizes: InputSizes, samples: Vec<TimingSample>) -> Self {
        BenchmarkRun {
            input_sizes,
            samples,
        }
    }

    pub fn all_verified(&self) -> bool {
        self.samples.iter().all(|s| s.verified)
    }
}

/// Time a single call of `f` with a monotonic clock.
fn time<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let out = black_box(f());
    (out, start.elapsed().as_secs_f64())
}

/// Generate `size` random values in `[0, size]`.
pub fn random_data<R: Rng>(rng: &mut R, size: usize) -> Vec<i64> {
    let upper = size as i64;
    (0..size).map(|_| rng.gen_range(0..=upper)).collect()
}

/// Benchmark all five algorithms at a single input size.
pub fn measure_size<R: Rng>(rng: &mut R, size: usize) -> Vec<TimingSample> {
    let test_data: Vec<i64> = (0..size as i64).collect();
    let random = random_data(rng, size);
    // Worst case for linear search; for size 0 the target is absent.
    let target = size as i64 - 1;

    let sample = |algorithm, elapsed_secs, verified| TimingSample {
        algorithm,
        input_size: size,
        elapsed_secs,
        verified,
    };

    let mut samples = Vec::with_capacity(Algorithm::ALL.len());

    let (found, secs) = time(|| search::linear_search(black_box(&test_data), black_box(target)));
    samples.push(sample(Algorithm::LinearSearch, secs, search_ok(&test_data, target, found)));

    let (found, secs) = time(|| search::binary_search(black_box(&test_data), black_box(target)));
    samples.push(sample(Algorithm::BinarySearch, secs, search_ok(&test_data, target, found)));

    let mut insertion_data = random.clone();
    let ((), secs) = time(|| insertion_sort::sort(black_box(&mut insertion_data)));
    samples.push(sample(Algorithm::InsertionSort, secs, is_sorted(&insertion_data)));

    let mut merge_data = random.clone();
    let ((), secs) = time(|| merge_sort::sort(black_box(&mut merge_data)));
    samples.push(sample(Algorithm::MergeSort, secs, is_sorted(&merge_data)));

    let mut radix_data = random;
    let (result, secs) = time(|| radix_sort::sort(black_box(&mut radix_data)));
    if let Err(ref e) = result {
        tracing::error!(size, error = %e, "radix sort rejected its input");
    }
    samples.push(sample(
        Algorithm::RadixSort,
        secs,
        result.is_ok() && is_sorted(&radix_data),
    ));

    for s in &samples {
        tracing::debug!(
            algorithm = s.algorithm.name(),
            size,
            elapsed_secs = s.elapsed_secs,
            verified = s.verified,
            "sample recorded"
        );
        if !s.verified {
            tracing::error!(algorithm = s.algorithm.name(), size, "output failed verification");
        }
    }

    samples
}

fn search_ok(data: &[i64], target: i64, found: Option<usize>) -> bool {
    match found {
        Some(i) => data[i] == target,
        None => !data.contains(&target),
    }
}

/// Run the benchmark over every input size.
///
/// `on_size` is called with each size's samples as soon as they are measured.
pub fn run<R, F>(input_sizes: &InputSizes, rng: &mut R, mut on_size: F) -> BenchmarkRun
where
    R: Rng,
    F: FnMut(usize, &[TimingSample]),
{
    let mut samples = Vec::with_capacity(input_sizes.len() * Algorithm::ALL.len());

    for &size in input_sizes.as_slice() {
        tracing::info!(size, "benchmarking input size");
        let measured = measure_size(rng, size);
        on_size(size, &measured);
        samples.extend(measured);
    }

    tracing::info!(sizes = input_sizes.len(), samples = samples.len(), "benchmark finished");

    BenchmarkRun {
        input_sizes: input_sizes.clone(),
        samples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_input_sizes_default() {
        assert_eq!(
            InputSizes::default().as_slice(),
            &[10, 100, 1000, 5000, 10000, 20000]
        );
    }

    #[test]
    fn test_input_sizes_rejects_empty() {
        assert_eq!(InputSizes::new(vec![]), Err(ConfigError::NoInputSizes));
    }

    #[test]
    fn test_random_data_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let data = random_data(&mut rng, 500);
        assert_eq!(data.len(), 500);
        assert!(data.iter().all(|&v| (0..=500).contains(&v)));
    }

    #[test]
    fn test_random_data_seeded_is_reproducible() {
        let a = random_data(&mut StdRng::seed_from_u64(42), 100);
        let b = random_data(&mut StdRng::seed_from_u64(42), 100);
        assert_eq!(a, b);
    }

    #[test]
    fn test_measure_size_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let samples = measure_size(&mut rng, 0);
        assert_eq!(samples.len(), 5);
        assert!(samples.iter().all(|s| s.verified && s.input_size == 0));
    }

    #[test]
    fn test_measure_size_order_and_verification() {
        let mut rng = StdRng::seed_from_u64(3);
        let samples = measure_size(&mut rng, 1000);
        let algorithms: Vec<Algorithm> = samples.iter().map(|s| s.algorithm).collect();
        assert_eq!(algorithms, Algorithm::ALL.to_vec());
        assert!(samples.iter().all(|s| s.verified));
        assert!(samples.iter().all(|s| s.elapsed_secs >= 0.0));
    }

    #[test]
    fn test_run_series_match_sizes() {
        let sizes = InputSizes::new(vec![10, 100, 500]).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let mut seen = Vec::new();

        let run = run(&sizes, &mut rng, |size, samples| {
            assert_eq!(samples.len(), 5);
            seen.push(size);
        });

        assert_eq!(seen, vec![10, 100, 500]);
        assert_eq!(run.input_sizes(), &[10, 100, 500]);
        assert_eq!(run.samples().len(), 15);
        for algorithm in Algorithm::ALL {
            assert_eq!(run.series(algorithm).len(), 3);
        }
        let rows: Vec<(usize, usize)> = run.rows().map(|(size, samples)| (size, samples.len())).collect();
        assert_eq!(rows, vec![(10, 5), (100, 5), (500, 5)]);
        assert!(run.all_verified());
    }

    #[test]
    fn test_run_rows_keep_repeated_sizes() {
        let sizes = InputSizes::new(vec![10, 10]).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let mut streamed = Vec::new();

        let run = run(&sizes, &mut rng, |_, samples| streamed.push(samples.to_vec()));

        let rows: Vec<Vec<TimingSample>> = run.rows().map(|(_, samples)| samples.to_vec()).collect();
        assert_eq!(rows, streamed);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_binary_search_does_not_scale_like_linear() {
        // Timing is noisy; compare the best of several runs with slack.
        let data: Vec<i64> = (0..20_000).collect();
        let target = 19_999;
        let best = |f: &dyn Fn() -> Option<usize>| {
            (0..5)
                .map(|_| time(|| f()).1)
                .fold(f64::MAX, f64::min)
        };

        let linear = best(&|| search::linear_search(black_box(&data), black_box(target)));
        let binary = best(&|| search::binary_search(black_box(&data), black_box(target)));
        assert!(binary < linear, "binary {binary} vs linear {linear}");
    }
}
