use chart_core::{Axis, Chart, Marker, RenderOptions, Series};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_chart_log(n: usize) -> Chart {
    let mut ch = Chart::new().with_title("bench");
    let insert = (1..=n).map(|i| (i as f64 * 100.0, (i as f64).powf(1.3))).collect();
    let range = (1..=n).map(|i| (i as f64 * 100.0, (i as f64).ln().max(0.1))).collect();
    ch.x_axis = Axis::new("n", 0.0, 1.0);
    ch.y_axis = Axis::log10("t", 1.0, 10.0);
    ch.add_series(Series::with_data(insert).with_label("insert").with_marker(Marker::Circle));
    ch.add_series(Series::with_data(range).with_label("range").with_marker(Marker::Square));
    ch.autoscale_axes(0.05);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[10usize, 1_000usize] {
        group.bench_function(format!("log_{n}"), |b| {
            let ch = build_chart_log(n);
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| black_box(ch.render_to_png_bytes(&opts).expect("render")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
