// File: crates/bench-plot/src/lib.rs
// Summary: Loads QuadTree benchmark measurements and renders the insert/range chart.

pub mod config;
pub mod error;
pub mod render;
pub mod table;

pub use config::{ChartConfig, Cli, SeriesConfig};
pub use error::{LoadError, RenderError};
pub use table::{Measurement, MeasurementTable};
