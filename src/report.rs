//! Benchmark Report Rendering
//!
//! Renders a [`BenchmarkRun`] as the fixed-width console table, as a
//! markdown table, or as JSON. Times are seconds with 8 decimal places.
//!
//! Table layout:
//! ```text
//! Input Size |   Linear (s) |   Binary (s) |   Insertion (s) |    Merge (s) |    Radix (s)
//! ---------------------------------------------------------------------------
//!         10 |   0.00000120 |   0.00000080 |      0.00000210 |   0.00000540 |   0.00000330
//! ```

use std::fmt;

use serde::Serialize;

use crate::benchmark::{Algorithm, BenchmarkRun, TimingSample};

/// Width of the "Input Size" column
const SIZE_WIDTH: usize = 10;
/// Length of the dashed rule under the header
const RULE_WIDTH: usize = 75;

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Fixed-width console table
    #[default]
    Table,
    /// Markdown table
    Markdown,
    /// JSON document with every sample
    Json,
}

fn column_width(algorithm: Algorithm) -> usize {
    match algorithm {
        Algorithm::InsertionSort => 15,
        _ => 12,
    }
}

/// The header line and rule of the console table.
pub fn table_header() -> String {
    let mut header = format!("{:>width$}", "Input Size", width = SIZE_WIDTH);
    for algorithm in Algorithm::ALL {
        let label = format!("{} (s)", algorithm.short_name());
        header.push_str(&format!(" | {:>width$}", label, width = column_width(algorithm)));
    }
    format!("{}\n{}", header, "-".repeat(RULE_WIDTH))
}

/// One table row for the samples of a single input size.
///
/// Algorithms missing from `samples` print as `N/A`.
pub fn format_row(input_size: usize, samples: &[TimingSample]) -> String {
    let mut row = format!("{:>width$}", input_size, width = SIZE_WIDTH);
    for algorithm in Algorithm::ALL {
        let width = column_width(algorithm);
        match samples.iter().find(|s| s.algorithm == algorithm) {
            Some(s) => row.push_str(&format!(" | {:>width$.8}", s.elapsed_secs, width = width)),
            None => row.push_str(&format!(" | {:>width$}", "N/A", width = width)),
        }
    }
    row
}

/// The complete console table for a run.
pub struct TableReport<'a>(pub &'a BenchmarkRun);

impl fmt::Display for TableReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", table_header())?;
        for (size, samples) in self.0.rows() {
            writeln!(f, "{}", format_row(size, samples))?;
        }
        Ok(())
    }
}

/// Time and space complexity of every algorithm.
pub struct ComplexityDiscussion;

impl fmt::Display for ComplexityDiscussion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Time Complexity Discussion:")?;
        for algorithm in Algorithm::ALL {
            writeln!(f, "- {}: {}", algorithm.name(), algorithm.time_complexity())?;
        }
        writeln!(f)?;
        writeln!(f, "Space Complexity Discussion:")?;
        for algorithm in Algorithm::ALL {
            writeln!(f, "- {}: {}", algorithm.name(), algorithm.space_complexity())?;
        }
        Ok(())
    }
}

/// The run as a markdown results table.
pub struct MarkdownReport<'a>(pub &'a BenchmarkRun);

impl fmt::Display for MarkdownReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Search and Sort Benchmark Report")?;
        writeln!(f)?;
        writeln!(f, "## Benchmark Results")?;
        writeln!(f)?;

        write!(f, "| Size |")?;
        for algorithm in Algorithm::ALL {
            write!(f, " {} (s) |", algorithm.name())?;
        }
        writeln!(f)?;
        write!(f, "|------|")?;
        for _ in Algorithm::ALL {
            write!(f, "------|")?;
        }
        writeln!(f)?;

        for (size, samples) in self.0.rows() {
            write!(f, "| {} |", format_size(size))?;
            for algorithm in Algorithm::ALL {
                let cell = samples
                    .iter()
                    .find(|s| s.algorithm == algorithm)
                    .map(|s| format!("{:.8}", s.elapsed_secs))
                    .unwrap_or_else(|| "N/A".to_string());
                write!(f, " {} |", cell)?;
            }
            writeln!(f)?;
        }

        if !self.0.all_verified() {
            writeln!(f)?;
            writeln!(f, "**Warning:** some outputs failed verification.")?;
        }

        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f, "*Report generated by search-sort-bench*")
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    input_sizes: &'a [usize],
    series: Vec<JsonSeries>,
    samples: &'a [TimingSample],
}

#[derive(Serialize)]
struct JsonSeries {
    algorithm: Algorithm,
    elapsed_secs: Vec<f64>,
}

/// The run as pretty-printed JSON: the size series, one timing series per
/// algorithm, and the raw samples.
pub fn to_json(run: &BenchmarkRun) -> serde_json::Result<String> {
    let report = JsonReport {
        input_sizes: run.input_sizes(),
        series: Algorithm::ALL
            .iter()
            .map(|&algorithm| JsonSeries {
                algorithm,
                elapsed_secs: run.series(algorithm),
            })
            .collect(),
        samples: run.samples(),
    };
    serde_json::to_string_pretty(&report)
}

/// Format a size as a human-readable string (e.g., "1K", "20K")
fn format_size(size: usize) -> String {
    if size >= 1_000_000 && size % 1_000_000 == 0 {
        format!("{}M", size / 1_000_000)
    } else if size >= 1_000 && size % 1_000 == 0 {
        format!("{}K", size / 1_000)
    } else {
        size.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::{self, InputSizes};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample(algorithm: Algorithm, elapsed_secs: f64) -> TimingSample {
        TimingSample {
            algorithm,
            input_size: 10,
            elapsed_secs,
            verified: true,
        }
    }

    fn small_run() -> BenchmarkRun {
        let sizes = InputSizes::new(vec![10, 1000]).unwrap();
        benchmark::run(&sizes, &mut StdRng::seed_from_u64(5), |_, _| {})
    }

    #[test]
    fn test_table_header() {
        let header = table_header();
        let mut lines = header.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Input Size |   Linear (s) |   Binary (s) |   Insertion (s) |    Merge (s) |    Radix (s)"
        );
        assert_eq!(lines.next().unwrap(), "-".repeat(75));
    }

    #[test]
    fn test_format_row() {
        let samples = vec![
            sample(Algorithm::LinearSearch, 0.0000012),
            sample(Algorithm::BinarySearch, 0.5),
            sample(Algorithm::InsertionSort, 0.00000021),
            sample(Algorithm::MergeSort, 1.25),
            sample(Algorithm::RadixSort, 0.0),
        ];
        assert_eq!(
            format_row(10, &samples),
            "        10 |   0.00000120 |   0.50000000 |      0.00000021 |   1.25000000 |   0.00000000"
        );
    }

    #[test]
    fn test_format_row_missing_sample() {
        let row = format_row(5000, &[sample(Algorithm::MergeSort, 0.1)]);
        assert_eq!(row.matches("N/A").count(), 4);
        assert!(row.starts_with("      5000 |"));
    }

    #[test]
    fn test_table_report_has_row_per_size() {
        let run = small_run();
        let table = TableReport(&run).to_string();
        assert_eq!(table.lines().count(), 4);
        assert!(table.lines().nth(2).unwrap().starts_with("        10 |"));
        assert!(table.lines().nth(3).unwrap().starts_with("      1000 |"));
    }

    #[test]
    fn test_table_report_repeated_size_rows() {
        let sizes = InputSizes::new(vec![10, 10]).unwrap();
        let mut streamed = Vec::new();
        let run = benchmark::run(&sizes, &mut StdRng::seed_from_u64(8), |size, samples| {
            streamed.push(format_row(size, samples));
        });

        let table = TableReport(&run).to_string();
        let rows: Vec<&str> = table.lines().skip(2).collect();
        assert_eq!(rows, streamed);
    }

    #[test]
    fn test_markdown_report_repeated_size_rows() {
        let mut samples = Vec::new();
        for secs in [0.25, 0.75] {
            for algorithm in Algorithm::ALL {
                samples.push(sample(algorithm, secs));
            }
        }
        let run = BenchmarkRun::from_parts(InputSizes::new(vec![10, 10]).unwrap(), samples);

        let markdown = MarkdownReport(&run).to_string();
        assert!(markdown.contains("| 10 | 0.25000000 |"));
        assert!(markdown.contains("| 10 | 0.75000000 |"));
    }

    #[test]
    fn test_complexity_discussion() {
        let text = ComplexityDiscussion.to_string();
        assert!(text.contains("- Binary Search: O(log n)"));
        assert!(text.contains("- Merge Sort: O(n) (needs temporary arrays)"));
    }

    #[test]
    fn test_markdown_report() {
        let run = small_run();
        let markdown = MarkdownReport(&run).to_string();
        assert!(markdown.contains("| Size | Linear Search (s) |"));
        assert!(markdown.contains("| 10 |"));
        assert!(markdown.contains("| 1K |"));
        assert!(!markdown.contains("Warning"));
    }

    #[test]
    fn test_to_json() {
        let run = small_run();
        let json: serde_json::Value = serde_json::from_str(&to_json(&run).unwrap()).unwrap();
        assert_eq!(json["input_sizes"], serde_json::json!([10, 1000]));
        assert_eq!(json["series"].as_array().unwrap().len(), 5);
        assert_eq!(json["series"][0]["algorithm"], "linear_search");
        assert_eq!(json["series"][4]["elapsed_secs"].as_array().unwrap().len(), 2);
        assert_eq!(json["samples"].as_array().unwrap().len(), 10);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(10), "10");
        assert_eq!(format_size(1000), "1K");
        assert_eq!(format_size(5000), "5K");
        assert_eq!(format_size(1500), "1500");
        assert_eq!(format_size(2_000_000), "2M");
    }
}
