// File: crates/chart-core/src/view.rs
// Visible ranges derived from series data, aware of log axes.

use crate::axis::{Axis, ScaleKind};
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Fit every placeable point of every series, padded by `margin` (a
    /// fraction of the span, applied in log space on log axes). Points a log
    /// axis cannot show are ignored; with nothing left the axis gets its
    /// empty range.
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        let xs = chart.series.iter().flat_map(|s| s.data_xy.iter().map(|&(x, _)| x));
        let ys = chart.series.iter().flat_map(|s| s.data_xy.iter().map(|&(_, y)| y));
        let (x_min, x_max) = fit(xs, chart.x_axis.kind, margin);
        let (y_min, y_max) = fit(ys, chart.y_axis.kind, margin);
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}

fn fit(values: impl Iterator<Item = f64>, kind: ScaleKind, margin: f64) -> (f64, f64) {
    let forward = |v: f64| match kind {
        ScaleKind::Linear => Some(v),
        ScaleKind::Log10 => (v > 0.0).then(|| v.log10()),
    };
    let inverse = |t: f64| match kind {
        ScaleKind::Linear => t,
        ScaleKind::Log10 => 10f64.powf(t),
    };

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for t in values.filter(|v| v.is_finite()).filter_map(forward) {
        lo = lo.min(t);
        hi = hi.max(t);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return Axis::empty_range(kind);
    }
    if (hi - lo).abs() < 1e-9 {
        lo -= 0.5;
        hi += 0.5;
    }
    let pad = (hi - lo) * margin.max(0.0);
    (inverse(lo - pad), inverse(hi + pad))
}
