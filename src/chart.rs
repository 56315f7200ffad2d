//! Chart Rendering
//!
//! Draws timing series against input size as SVG line charts with markers,
//! a legend and a grid. The combined chart uses a logarithmic y axis so the
//! sub-microsecond searches and the quadratic insertion sort fit together.

use std::fs;
use std::path::{Path, PathBuf};

use plotters::coord::ranged1d::{Ranged, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::benchmark::{Algorithm, BenchmarkRun};
use crate::error::{ChartError, ConfigError};

const TITLE_FONT_SIZE: u32 = 28;
const LABEL_FONT_SIZE: u32 = 16;
const MARKER_SIZE: u32 = 4;

/// Smallest time drawn on a log axis; zero readings are clamped up to it.
const LOG_FLOOR_SECS: f64 = 1e-9;

/// Default SVG canvas size
pub const DEFAULT_CHART_SIZE: (u32, u32) = (1000, 600);

/// Which chart to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ChartKind {
    /// Linear and binary search
    Search,
    /// Insertion, merge and radix sort
    Sort,
    /// All five algorithms on a log scale
    Combined,
}

impl ChartKind {
    pub fn algorithms(self) -> &'static [Algorithm] {
        match self {
            ChartKind::Search => &Algorithm::SEARCHES,
            ChartKind::Sort => &Algorithm::SORTS,
            ChartKind::Combined => &Algorithm::ALL,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Search => "Search Algorithm Performance",
            ChartKind::Sort => "Sorting Algorithm Performance",
            ChartKind::Combined => "Search and Sort Algorithm Performance (Log Scale)",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::Search => "search.svg",
            ChartKind::Sort => "sort.svg",
            ChartKind::Combined => "combined.svg",
        }
    }

    pub fn log_scale(self) -> bool {
        matches!(self, ChartKind::Combined)
    }
}

fn series_color(algorithm: Algorithm) -> RGBColor {
    match algorithm {
        Algorithm::LinearSearch => BLUE,
        Algorithm::BinarySearch => RED,
        Algorithm::InsertionSort => GREEN,
        Algorithm::MergeSort => MAGENTA,
        Algorithm::RadixSort => RGBColor(255, 140, 0),
    }
}

/// One named line of the chart.
#[derive(Debug, Clone)]
struct Line {
    algorithm: Algorithm,
    points: Vec<(f64, f64)>,
}

/// Collect the lines for `kind`, checking every series has one value per size.
fn collect_lines(kind: ChartKind, run: &BenchmarkRun) -> Result<Vec<Line>, ChartError> {
    let sizes = run.input_sizes();
    if sizes.is_empty() {
        return Err(ChartError::Empty);
    }

    kind.algorithms()
        .iter()
        .map(|&algorithm| {
            let series = run.series(algorithm);
            if series.len() != sizes.len() {
                return Err(ChartError::SeriesLength {
                    name: algorithm.name().to_string(),
                    expected: sizes.len(),
                    actual: series.len(),
                });
            }
            let points = sizes.iter().map(|&s| s as f64).zip(series).collect();
            Ok(Line { algorithm, points })
        })
        .collect()
}

fn drawing(e: impl std::fmt::Display) -> ChartError {
    ChartError::Drawing(e.to_string())
}

/// Render `kind` for `run` as an SVG document.
pub fn render_svg(kind: ChartKind, run: &BenchmarkRun, size: (u32, u32)) -> Result<String, ChartError> {
    let lines = collect_lines(kind, run)?;
    let mut svg = String::new();
    draw(&mut svg, kind, &lines, size)?;
    Ok(svg)
}

fn draw(svg: &mut String, kind: ChartKind, lines: &[Line], size: (u32, u32)) -> Result<(), ChartError> {
    let root = SVGBackend::with_string(svg, size).into_drawing_area();
    root.fill(&WHITE).map_err(drawing)?;

    let x_max = lines
        .iter()
        .flat_map(|l| l.points.iter().map(|p| p.0))
        .fold(0.0_f64, f64::max);
    let x_range = 0.0..(x_max * 1.05).max(1.0);

    let y_max = lines
        .iter()
        .flat_map(|l| l.points.iter().map(|p| p.1))
        .fold(0.0_f64, f64::max);

    if kind.log_scale() {
        let y_min = log_floor(lines);
        let y_range = (y_min / 2.0)..(y_max.max(y_min) * 2.0);
        let clamped: Vec<Line> = lines
            .iter()
            .map(|l| Line {
                algorithm: l.algorithm,
                points: l.points.iter().map(|&(x, y)| (x, y.max(y_min))).collect(),
            })
            .collect();

        let mut chart = ChartBuilder::on(&root)
            .caption(kind.title(), ("sans-serif", TITLE_FONT_SIZE))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(90)
            .build_cartesian_2d(x_range, y_range.log_scale())
            .map_err(drawing)?;
        draw_lines(&mut chart, &clamped)?;
    } else {
        let y_range = 0.0..(y_max * 1.1).max(LOG_FLOOR_SECS);
        let mut chart = ChartBuilder::on(&root)
            .caption(kind.title(), ("sans-serif", TITLE_FONT_SIZE))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(90)
            .build_cartesian_2d(x_range, y_range)
            .map_err(drawing)?;
        draw_lines(&mut chart, lines)?;
    }

    root.present().map_err(drawing)?;
    Ok(())
}

/// Lower bound of a log axis: the smallest positive reading, never below
/// [`LOG_FLOOR_SECS`].
fn log_floor(lines: &[Line]) -> f64 {
    lines
        .iter()
        .flat_map(|l| l.points.iter().map(|p| p.1))
        .filter(|&v| v > 0.0)
        .reduce(f64::min)
        .map_or(LOG_FLOOR_SECS, |v| v.max(LOG_FLOOR_SECS))
}

fn draw_lines<'a, DB, Y>(
    chart: &mut ChartContext<'a, DB, Cartesian2d<RangedCoordf64, Y>>,
    lines: &[Line],
) -> Result<(), ChartError>
where
    DB: DrawingBackend + 'a,
    Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    chart
        .configure_mesh()
        .x_desc("Input Size")
        .y_desc("Execution Time (seconds)")
        .label_style(("sans-serif", LABEL_FONT_SIZE))
        .draw()
        .map_err(drawing)?;

    for (idx, line) in lines.iter().enumerate() {
        let color = series_color(line.algorithm);
        chart
            .draw_series(LineSeries::new(line.points.iter().copied(), color.stroke_width(2)))
            .map_err(drawing)?
            .label(line.algorithm.name())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        // Distinct marker per series
        let points = line.points.iter().copied();
        let drawn = match idx % 3 {
            0 => chart
                .draw_series(points.map(|p| Circle::new(p, MARKER_SIZE, color.filled())))
                .map(|_| ()),
            1 => chart
                .draw_series(points.map(|p| TriangleMarker::new(p, MARKER_SIZE + 1, color.filled())))
                .map(|_| ()),
            _ => chart
                .draw_series(points.map(|p| Cross::new(p, MARKER_SIZE, color.stroke_width(2))))
                .map(|_| ()),
        };
        drawn.map_err(drawing)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(drawing)?;

    Ok(())
}

/// Receives chart requests from the menu.
pub trait ChartSink {
    /// Present `kind` for `run`, returning where it was written.
    fn show(&mut self, kind: ChartKind, run: &BenchmarkRun) -> Result<PathBuf, ChartError>;
}

/// Writes each requested chart as an SVG file under a directory.
#[derive(Debug, Clone)]
pub struct SvgChartWriter {
    dir: PathBuf,
    size: (u32, u32),
}

impl SvgChartWriter {
    pub fn new(dir: impl Into<PathBuf>, size: (u32, u32)) -> Result<Self, ConfigError> {
        let (width, height) = size;
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidChartSize { width, height });
        }
        Ok(SvgChartWriter {
            dir: dir.into(),
            size,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}

impl ChartSink for SvgChartWriter {
    fn show(&mut self, kind: ChartKind, run: &BenchmarkRun) -> Result<PathBuf, ChartError> {
        let svg = render_svg(kind, run, self.size)?;
        let path = self.dir.join(kind.file_name());

        fs::create_dir_all(&self.dir).map_err(|source| ChartError::Write {
            path: self.dir.clone(),
            source,
        })?;
        fs::write(&path, svg).map_err(|source| ChartError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!(chart = ?kind, path = %path.display(), "chart written");
        Ok(path)
    }
}
