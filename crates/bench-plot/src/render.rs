// File: crates/bench-plot/src/render.rs
// Summary: Maps a Measurement Table and ChartConfig onto a chart and writes it as PNG.

use std::path::Path;

use chart_core::{Axis, Chart, RenderOptions, Series};
use log::{info, warn};

use crate::config::ChartConfig;
use crate::error::RenderError;
use crate::table::MeasurementTable;

/// Fraction of the data span left free around the plotted points.
const AXIS_MARGIN: f64 = 0.05;

/// Build the chart: one line+marker series per configured entry against `n`,
/// axes fitted to the data.
pub fn build_chart(table: &MeasurementTable, config: &ChartConfig) -> Result<Chart, RenderError> {
    let mut chart = Chart::new().with_title(config.title.as_str());
    chart.x_axis = Axis::new(config.x_label.as_str(), 0.0, 1.0);
    let (y_min, y_max) = Axis::empty_range(config.y_scale);
    chart.y_axis = Axis::new(config.y_label.as_str(), y_min, y_max).with_kind(config.y_scale);

    for sc in &config.series {
        let data = table
            .xy(&sc.column)
            .ok_or_else(|| RenderError::MissingColumn { column: sc.column.clone() })?;
        chart.add_series(Series::with_data(data).with_label(sc.label.as_str()).with_marker(sc.marker));
    }

    chart.autoscale_axes(AXIS_MARGIN);
    Ok(chart)
}

pub fn render_options(config: &ChartConfig) -> RenderOptions {
    let (width, height) = config.pixel_size();
    RenderOptions { theme: config.theme, ..RenderOptions::with_size(width, height) }
}

/// Render `table` with `config` and write the PNG to `output`, replacing any
/// existing file. A zero-row table yields a chart with empty axes.
pub fn render(table: &MeasurementTable, config: &ChartConfig, output: &Path) -> Result<(), RenderError> {
    if table.is_empty() {
        warn!("measurement table is empty; rendering empty axes");
    }
    let chart = build_chart(table, config)?;
    let opts = render_options(config);
    chart.render_to_png(&opts, output)?;
    info!("wrote {}x{} chart to {}", opts.width, opts.height, output.display());
    Ok(())
}
