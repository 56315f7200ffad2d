//! Error types
//!
//! The algorithms themselves never fail on well-formed input. These errors
//! make their preconditions explicit at the checked entry points, and cover
//! configuration and chart output.

use std::path::PathBuf;

/// Precondition violation reported by a sort routine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    #[error("radix sort requires non-negative values, found {value} at index {index}")]
    NegativeValue { index: usize, value: i64 },
}

/// Precondition violation reported by a search routine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("binary search requires ascending input, order breaks at index {index}")]
    Unsorted { index: usize },
}

/// Invalid run configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("at least one input size is required")]
    NoInputSizes,

    #[error("chart dimensions must be non-zero, got {width}x{height}")]
    InvalidChartSize { width: u32, height: u32 },
}

/// Failure while rendering or writing a chart.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("series '{name}' has {actual} points, expected {expected}")]
    SeriesLength {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("nothing to plot")]
    Empty,

    #[error("drawing failed: {0}")]
    Drawing(String),

    #[error("failed to write chart to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
