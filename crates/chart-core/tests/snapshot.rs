// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic small charts to PNG bytes (labels off).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_core::{Axis, Chart, Marker, RenderOptions, Series};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(chart: &Chart) -> Vec<u8> {
    let mut opts = RenderOptions::with_size(480, 300);
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_linear_line() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 2.0);
    chart.show_legend = false;
    chart.add_series(Series::with_data(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.5), (4.0, 1.0)]));
    write_or_compare("linear_line.png", &render_bytes(&chart));
}

#[test]
fn golden_log_markers() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("n", 0.0, 1.0);
    chart.y_axis = Axis::log10("t", 1.0, 10.0);
    chart.add_series(
        Series::with_data(vec![(100.0, 5.2), (1000.0, 48.9), (5000.0, 260.0)])
            .with_label("insert")
            .with_marker(Marker::Circle),
    );
    chart.add_series(
        Series::with_data(vec![(100.0, 3.1), (1000.0, 12.4), (5000.0, 30.5)])
            .with_label("range")
            .with_marker(Marker::Square),
    );
    chart.autoscale_axes(0.05);
    write_or_compare("log_markers.png", &render_bytes(&chart));
}

#[test]
fn rendering_is_deterministic() {
    let mut chart = Chart::new();
    chart.y_axis = Axis::log10("t", 1.0, 10.0);
    chart.add_series(Series::with_data(vec![(1.0, 2.0), (2.0, 20.0)]).with_marker(Marker::Circle));
    chart.autoscale_axes(0.05);
    let a = image::load_from_memory(&render_bytes(&chart)).unwrap().to_rgba8();
    let b = image::load_from_memory(&render_bytes(&chart)).unwrap().to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw());
}
