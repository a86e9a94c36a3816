// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{Axis, Chart, Marker, RenderOptions, Series};

fn log_chart() -> Chart {
    let mut chart = Chart::new().with_title("Smoke");
    chart.x_axis = Axis::new("n", 0.0, 1.0);
    chart.y_axis = Axis::log10("t", 1.0, 10.0);
    chart.add_series(
        Series::with_data(vec![(100.0, 5.2), (1000.0, 48.9), (10000.0, 512.0)])
            .with_label("insert")
            .with_marker(Marker::Circle),
    );
    chart.add_series(
        Series::with_data(vec![(100.0, 3.1), (1000.0, 12.4), (10000.0, 40.0)])
            .with_label("range")
            .with_marker(Marker::Square),
    );
    chart.autoscale_axes(0.05);
    chart
}

#[test]
fn render_smoke_png() {
    let chart = log_chart();
    let opts = RenderOptions::default();
    let dir = tempfile_dir("smoke");
    let out = dir.join("smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (opts.width as u32, opts.height as u32));
}

#[test]
fn empty_chart_renders_axes_only() {
    let mut chart = Chart::new();
    chart.y_axis = Axis::log10("t", 1.0, 10.0);
    chart.add_series(Series::new().with_label("nothing"));
    chart.autoscale_axes(0.05);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(!bytes.is_empty());
}

#[test]
fn non_positive_values_on_log_axis_do_not_fail() {
    let mut chart = Chart::new();
    chart.y_axis = Axis::log10("t", 1.0, 10.0);
    chart.add_series(Series::with_data(vec![(0.0, 1.0), (1.0, 0.0), (2.0, -4.0), (3.0, 8.0)]));
    chart.autoscale_axes(0.05);
    assert!(chart.y_axis.min > 0.0);

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    chart.render_to_png_bytes(&opts).expect("render bytes");
}

#[test]
fn unwritable_destination_is_reported() {
    let dir = tempfile_dir("unwritable");
    // a regular file where a directory is expected
    let blocker = dir.join("blocker");
    std::fs::write(&blocker, b"x").unwrap();
    let out = blocker.join("chart.png");

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let err = log_chart().render_to_png(&opts, &out).expect_err("must fail");
    assert!(matches!(err, chart_core::ChartError::Write { .. }), "got {err:?}");
}

fn tempfile_dir(name: &str) -> std::path::PathBuf {
    let dir = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
