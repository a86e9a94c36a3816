// File: crates/bench-plot/src/config.rs
// Summary: Command line/environment options and the fixed chart styling configuration.

use std::path::PathBuf;

use chart_core::{Marker, ScaleKind, Theme};
use clap::Parser;
use log::warn;

use crate::table::{TIME_INSERT, TIME_RANGE};

pub const DEFAULT_INPUT: &str = "benchmark_results.csv";
pub const DEFAULT_OUTPUT: &str = "benchmark_quadtree_insert_range.png";
pub const DEFAULT_DPI: u32 = 100;

/// Render QuadTree insertion and range-query timings to a PNG chart.
#[derive(Debug, Parser)]
#[command(name = "bench-plot", version)]
pub struct Cli {
    /// Benchmark CSV with `n`, `time_insert` and `time_range` columns
    #[arg(short, long, value_name = "FILE", env = "BENCH_PLOT_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Where to write the chart; an existing file is replaced
    #[arg(short, long, value_name = "FILE", env = "BENCH_PLOT_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Pixels per figure inch
    #[arg(long, env = "BENCH_PLOT_DPI", default_value_t = DEFAULT_DPI,
          value_parser = clap::value_parser!(u32).range(10..=600))]
    pub dpi: u32,

    /// Color theme (light, dark)
    #[arg(long, env = "BENCH_PLOT_THEME", default_value = "light")]
    pub theme: String,
}

/// Figure size in inches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSize {
    pub width: f32,
    pub height: f32,
}

/// One plotted series: which table column, its legend label and marker.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesConfig {
    pub column: String,
    pub label: String,
    pub marker: Marker,
}

impl SeriesConfig {
    pub fn new(column: impl Into<String>, label: impl Into<String>, marker: Marker) -> Self {
        Self { column: column.into(), label: label.into(), marker }
    }
}

#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub figure_size: FigureSize,
    pub dpi: u32,
    pub x_label: String,
    pub y_label: String,
    pub title: String,
    pub y_scale: ScaleKind,
    pub series: Vec<SeriesConfig>,
    pub theme: Theme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            figure_size: FigureSize { width: 12.0, height: 6.0 },
            dpi: DEFAULT_DPI,
            x_label: "Number of points (n)".to_string(),
            y_label: "Time (μs)".to_string(),
            title: "QuadTree Insertion and Range Query Performance".to_string(),
            y_scale: ScaleKind::Log10,
            series: vec![
                SeriesConfig::new(TIME_INSERT, "Insertion", Marker::Circle),
                SeriesConfig::new(TIME_RANGE, "Range query", Marker::Square),
            ],
            theme: Theme::light(),
        }
    }
}

impl ChartConfig {
    /// The fixed chart with the CLI's dpi and theme applied. Unknown theme
    /// names fall back to light.
    pub fn from_cli(cli: &Cli) -> Self {
        let theme = chart_core::theme::find(&cli.theme).unwrap_or_else(|| {
            warn!("unknown theme '{}', using light", cli.theme);
            Theme::light()
        });
        Self { dpi: cli.dpi, theme, ..Self::default() }
    }

    /// Output image size in pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        let dpi = self.dpi as f32;
        (
            (self.figure_size.width * dpi).round() as i32,
            (self.figure_size.height * dpi).round() as i32,
        )
    }
}
