//! Run Configuration
//!
//! Command-line options are parsed with clap and validated into [`Settings`]
//! before any benchmarking starts.

use std::path::PathBuf;

use clap::Parser;

use crate::benchmark::{InputSizes, DEFAULT_INPUT_SIZES};
use crate::chart::{ChartKind, SvgChartWriter, DEFAULT_CHART_SIZE};
use crate::error::ConfigError;
use crate::report::ReportFormat;

/// Time linear/binary search and insertion/merge/radix sort over a series
/// of input sizes, then chart the results.
#[derive(Debug, Clone, Parser)]
#[command(name = "search-sort-bench", version, about)]
pub struct Cli {
    /// Comma-separated input sizes to benchmark
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_INPUT_SIZES)]
    pub sizes: Vec<usize>,

    /// Seed for the random sort inputs (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    pub format: ReportFormat,

    /// Directory charts are written to
    #[arg(long, default_value = "charts")]
    pub chart_dir: PathBuf,

    /// Chart width in pixels
    #[arg(long, default_value_t = DEFAULT_CHART_SIZE.0)]
    pub chart_width: u32,

    /// Chart height in pixels
    #[arg(long, default_value_t = DEFAULT_CHART_SIZE.1)]
    pub chart_height: u32,

    /// Render this chart and exit instead of showing the menu
    #[arg(long, value_enum, conflicts_with = "no_menu")]
    pub chart: Option<ChartKind>,

    /// Skip the interactive chart menu
    #[arg(long)]
    pub no_menu: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// What to do once the benchmark and report are done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterRun {
    Menu,
    Chart(ChartKind),
    Exit,
}

/// Validated settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub input_sizes: InputSizes,
    pub seed: Option<u64>,
    pub format: ReportFormat,
    pub charts: SvgChartWriter,
    pub after_run: AfterRun,
    pub log_level: String,
}

impl TryFrom<Cli> for Settings {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let input_sizes = InputSizes::new(cli.sizes)?;

        let charts = SvgChartWriter::new(cli.chart_dir, (cli.chart_width, cli.chart_height))?;

        let after_run = match (cli.chart, cli.no_menu) {
            (Some(kind), _) => AfterRun::Chart(kind),
            (None, true) => AfterRun::Exit,
            (None, false) => AfterRun::Menu,
        };

        Ok(Settings {
            input_sizes,
            seed: cli.seed,
            format: cli.format,
            charts,
            after_run,
            log_level: cli.log_level,
        })
    }
}
