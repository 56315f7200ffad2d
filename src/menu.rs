//! Interactive Chart Menu
//!
//! After the benchmark finishes, the user picks which chart to draw from a
//! numbered menu. Input lines are parsed into a [`Command`] and dispatched
//! until the user exits or input ends.

use std::io::{self, BufRead, Write};

use crate::benchmark::BenchmarkRun;
use crate::chart::{ChartKind, ChartSink};

pub const MENU: &str = "\
Choose which graph to display:
1. Search Algorithms Performance
2. Sorting Algorithms Performance
3. Combined Search and Sort (Log Scale)
4. Exit";

pub const PROMPT: &str = "Enter your choice (1-4): ";

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Show(ChartKind),
    Exit,
}

impl Command {
    /// Parse one line of input. Returns `None` for anything but `1`-`4`.
    pub fn parse(line: &str) -> Option<Command> {
        match line.trim() {
            "1" => Some(Command::Show(ChartKind::Search)),
            "2" => Some(Command::Show(ChartKind::Sort)),
            "3" => Some(Command::Show(ChartKind::Combined)),
            "4" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Prompt for commands on `input` until `4` or end of input.
pub fn run<R, W, S>(mut input: R, output: &mut W, sink: &mut S, results: &BenchmarkRun) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    S: ChartSink,
{
    let mut line = String::new();
    loop {
        writeln!(output)?;
        writeln!(output, "{}", MENU)?;
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // stdin closed
            writeln!(output)?;
            writeln!(output, "Exiting program.")?;
            return Ok(());
        }

        match Command::parse(&line) {
            Some(Command::Show(kind)) => match sink.show(kind, results) {
                Ok(path) => writeln!(output, "Chart written to {}", path.display())?,
                Err(e) => {
                    tracing::warn!(chart = ?kind, error = %e, "chart rendering failed");
                    writeln!(output, "Could not render chart: {}", e)?;
                }
            },
            Some(Command::Exit) => {
                writeln!(output, "Exiting program.")?;
                return Ok(());
            }
            None => {
                tracing::debug!(input = line.trim(), "invalid menu choice");
                writeln!(output, "Invalid choice. Please select a valid option.")?;
            }
        }
    }
}
