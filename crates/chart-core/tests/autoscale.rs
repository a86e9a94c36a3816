// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over several series on linear and log axes.

use chart_core::{Axis, Chart, Series};

#[test]
fn autoscale_covers_all_series() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.add_series(Series::with_data(vec![(2.0, 6.0), (3.0, 1.5)]));

    chart.autoscale_axes(0.0);

    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 5.0 - 1e-9);
    assert!(chart.y_axis.min <= 1.0 + 1e-9);
    assert!(chart.y_axis.max >= 6.0 - 1e-9);
}

#[test]
fn autoscale_log_axis_stays_positive() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("n", 0.0, 1.0);
    chart.y_axis = Axis::log10("t", 1.0, 10.0);
    chart.add_series(Series::with_data(vec![(100.0, 5.2), (1000.0, 48.9)]));
    chart.add_series(Series::with_data(vec![(100.0, 3.1), (1000.0, 12.4)]));

    chart.autoscale_axes(0.05);

    assert!(chart.y_axis.is_log());
    assert!(chart.y_axis.min > 0.0 && chart.y_axis.min < 3.1);
    assert!(chart.y_axis.max > 48.9);
    assert!(chart.x_axis.min < 100.0 && chart.x_axis.max > 1000.0);
}
