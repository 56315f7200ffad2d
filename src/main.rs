//! Search and Sort Benchmark
//!
//! Times linear and binary search plus insertion, merge and radix sort over a
//! series of input sizes, prints the results, and then offers a menu of
//! charts. Each algorithm runs once per size; there is no warm-up or
//! repetition.

use std::io;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use search_sort_bench::benchmark;
use search_sort_bench::chart::ChartSink;
use search_sort_bench::config::{AfterRun, Cli, Settings};
use search_sort_bench::menu;
use search_sort_bench::report::{self, ComplexityDiscussion, MarkdownReport, ReportFormat};

fn main() -> anyhow::Result<()> {
    let settings = Settings::try_from(Cli::parse()).context("invalid configuration")?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    tracing::info!(
        sizes = ?settings.input_sizes.as_slice(),
        seed = ?settings.seed,
        "starting benchmark"
    );

    let results = match settings.format {
        ReportFormat::Table => {
            println!("Analyzing search and sort algorithm performance...\n");
            println!("{}", report::table_header());
            let results = benchmark::run(&settings.input_sizes, &mut rng, |size, samples| {
                println!("{}", report::format_row(size, samples));
            });
            println!();
            print!("{}", ComplexityDiscussion);
            results
        }
        ReportFormat::Markdown => {
            let results = benchmark::run(&settings.input_sizes, &mut rng, |_, _| {});
            print!("{}", MarkdownReport(&results));
            results
        }
        ReportFormat::Json => {
            let results = benchmark::run(&settings.input_sizes, &mut rng, |_, _| {});
            println!("{}", report::to_json(&results).context("failed to serialize report")?);
            results
        }
    };

    if !results.all_verified() {
        tracing::warn!("one or more algorithm outputs failed verification");
    }

    let mut charts = settings.charts;
    match settings.after_run {
        AfterRun::Menu => {
            let stdin = io::stdin();
            menu::run(stdin.lock(), &mut io::stdout(), &mut charts, &results)
                .context("menu input/output failed")?;
        }
        AfterRun::Chart(kind) => {
            let path = charts
                .show(kind, &results)
                .with_context(|| format!("failed to write chart to {}", charts.dir().display()))?;
            println!("Chart written to {}", path.display());
        }
        AfterRun::Exit => {}
    }

    Ok(())
}
