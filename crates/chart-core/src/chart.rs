// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::io::Write;
use std::path::Path;

use log::debug;
use skia_safe as skia;

use crate::error::ChartError;
use crate::geometry::RectI32;
use crate::grid::AxisTicks;
use crate::legend::{draw_legend, LegendEntry};
use crate::scale::Scale;
use crate::series::{Marker, Series};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

const TITLE_SIZE: f32 = 18.0;
const LABEL_SIZE: f32 = 14.0;
const TICK_LABEL_SIZE: f32 = 12.0;
const TICK_LEN: f32 = 5.0;
const MINOR_TICK_LEN: f32 = 3.0;
const MARKER_RADIUS: f32 = 4.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw title, axis labels, tick labels and legend text. Turn off for
    /// pixel output that does not depend on installed fonts.
    pub draw_labels: bool,
}

impl RenderOptions {
    pub fn with_size(width: i32, height: i32) -> Self {
        Self { width, height, ..Self::default() }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub show_legend: bool,
    pub show_grid: bool,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            show_legend: true,
            show_grid: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis ranges to the series data, padded by `margin` of the span.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Render the chart to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        self.draw(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`. The file is replaced
    /// atomically: a failed render leaves any previous file untouched.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<Path>,
    ) -> Result<(), ChartError> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        persist(path, &bytes)?;
        debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let shaper = opts.draw_labels.then(TextShaper::new);
        let x_ticks = AxisTicks::for_axis(&self.x_axis);
        let y_ticks = AxisTicks::for_axis(&self.y_axis);

        let plot = self.plot_rect(opts, shaper.as_ref(), &y_ticks);
        let sx = Scale::for_axis(&self.x_axis, plot.left as f32, plot.right as f32);
        let sy = Scale::for_axis(&self.y_axis, plot.bottom as f32, plot.top as f32);

        if self.show_grid {
            draw_grid(canvas, plot, &sx, &sy, &x_ticks, &y_ticks, theme);
        }

        canvas.save();
        canvas.clip_rect(plot.to_rect(), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            let color = theme.series_color(i);
            draw_line_series(canvas, &sx, &sy, s, color);
        }
        canvas.restore();

        draw_axes(canvas, plot, &sx, &sy, &x_ticks, &y_ticks, theme, shaper.as_ref());

        if let Some(shaper) = &shaper {
            self.draw_labels(canvas, plot, theme, shaper);
        }

        if self.show_legend {
            let entries: Vec<LegendEntry<'_>> = self
                .series
                .iter()
                .enumerate()
                .filter_map(|(i, s)| {
                    s.label.as_deref().map(|label| LegendEntry {
                        label,
                        color: theme.series_color(i),
                        marker: s.marker,
                    })
                })
                .collect();
            draw_legend(canvas, plot, &entries, theme, shaper.as_ref());
        }
    }

    /// Plot area inside the insets; the left inset grows to fit the widest
    /// y tick label plus the rotated axis label.
    fn plot_rect(&self, opts: &RenderOptions, shaper: Option<&TextShaper>, y_ticks: &AxisTicks) -> RectI32 {
        let mut insets = opts.insets;
        if let Some(sh) = shaper {
            let widest = y_ticks
                .labelled()
                .map(|(_, l)| sh.measure_width(l, TICK_LABEL_SIZE))
                .fold(0.0, f32::max);
            let need = (widest + TICK_LEN + 6.0 + LABEL_SIZE * 2.0 + 8.0).ceil() as u32;
            insets.left = insets.left.max(need);
        }
        let left = insets.left as i32;
        let top = insets.top as i32;
        let right = (opts.width - insets.right as i32).max(left + 1);
        let bottom = (opts.height - insets.bottom as i32).max(top + 1);
        RectI32::from_ltrb(left, top, right, bottom)
    }

    fn draw_labels(&self, canvas: &skia::Canvas, plot: RectI32, theme: &Theme, shaper: &TextShaper) {
        if let Some(title) = &self.title {
            let top = (plot.top as f32 - TITLE_SIZE * 1.2 - 10.0).max(4.0);
            shaper.draw(canvas, title, (plot.center_x(), top), Anchor::TopCenter, TITLE_SIZE, theme.title);
        }

        let x_label_top = plot.bottom as f32 + TICK_LEN + 6.0 + TICK_LABEL_SIZE * 1.4 + 6.0;
        shaper.draw(
            canvas,
            &self.x_axis.label,
            (plot.center_x(), x_label_top),
            Anchor::TopCenter,
            LABEL_SIZE,
            theme.axis_label,
        );
        shaper.draw_vertical(
            canvas,
            &self.y_axis.label,
            (6.0 + LABEL_SIZE * 0.6, plot.center_y()),
            LABEL_SIZE,
            theme.axis_label,
        );
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

/// Write `bytes` to a temp file next to `path`, then rename over it.
fn persist(path: &Path, bytes: &[u8]) -> Result<(), ChartError> {
    let write_err = |source: std::io::Error| ChartError::Write { path: path.to_path_buf(), source };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(write_err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(bytes).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    plot: RectI32,
    sx: &Scale,
    sy: &Scale,
    x_ticks: &AxisTicks,
    y_ticks: &AxisTicks,
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    // verticals
    for x in x_ticks.major.iter().filter_map(|tk| sx.to_px(tk.value)) {
        canvas.draw_line((x, t), (x, b), &paint);
    }
    // horizontals
    for y in y_ticks.major.iter().filter_map(|tk| sy.to_px(tk.value)) {
        canvas.draw_line((l, y), (r, y), &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_axes(
    canvas: &skia::Canvas,
    plot: RectI32,
    sx: &Scale,
    sy: &Scale,
    x_ticks: &AxisTicks,
    y_ticks: &AxisTicks,
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.0);
    canvas.draw_rect(plot.to_rect(), &axis_paint);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    let (l, b) = (plot.left as f32, plot.bottom as f32);

    for (ticks, len) in [(&x_ticks.major, TICK_LEN), (&x_ticks.minor, MINOR_TICK_LEN)] {
        for tk in ticks.iter().filter(|tk| sx.contains(tk.value)) {
            let Some(x) = sx.to_px(tk.value) else { continue };
            canvas.draw_line((x, b), (x, b + len), &tick_paint);
            if let (Some(sh), Some(label)) = (shaper, tk.label.as_deref()) {
                sh.draw(canvas, label, (x, b + TICK_LEN + 6.0), Anchor::TopCenter, TICK_LABEL_SIZE, theme.axis_label);
            }
        }
    }

    for (ticks, len) in [(&y_ticks.major, TICK_LEN), (&y_ticks.minor, MINOR_TICK_LEN)] {
        for tk in ticks.iter().filter(|tk| sy.contains(tk.value)) {
            let Some(y) = sy.to_px(tk.value) else { continue };
            canvas.draw_line((l - len, y), (l, y), &tick_paint);
            if let (Some(sh), Some(label)) = (shaper, tk.label.as_deref()) {
                sh.draw(canvas, label, (l - TICK_LEN - 6.0, y), Anchor::CenterRight, TICK_LABEL_SIZE, theme.axis_label);
            }
        }
    }
}

fn draw_line_series(canvas: &skia::Canvas, sx: &Scale, sy: &Scale, series: &Series, color: skia::Color) {
    // `None` marks a point the scales cannot place; it breaks the line.
    let points: Vec<Option<(f32, f32)>> = series
        .data_xy
        .iter()
        .map(|&(x, y)| Some((sx.to_px(x)?, sy.to_px(y)?)))
        .collect();

    let mut path = skia::Path::new();
    let mut pen_down = false;
    for p in &points {
        match *p {
            Some(pt) if pen_down => {
                path.line_to(pt);
            }
            Some(pt) => {
                path.move_to(pt);
                pen_down = true;
            }
            None => pen_down = false,
        }
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(color);
    canvas.draw_path(&path, &stroke);

    for &pt in points.iter().flatten() {
        draw_marker(canvas, series.marker, pt, color);
    }
}

pub(crate) fn draw_marker(canvas: &skia::Canvas, marker: Marker, (x, y): (f32, f32), color: skia::Color) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);

    match marker {
        Marker::None => {}
        Marker::Circle => {
            canvas.draw_circle((x, y), MARKER_RADIUS, &fill);
        }
        Marker::Square => {
            let h = MARKER_RADIUS * 0.9;
            canvas.draw_rect(skia::Rect::from_ltrb(x - h, y - h, x + h, y + h), &fill);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_rect_respects_insets_without_labels() {
        let chart = Chart::new();
        let opts = RenderOptions { draw_labels: false, ..RenderOptions::with_size(400, 300) };
        let rect = chart.plot_rect(&opts, None, &AxisTicks::default());
        assert_eq!(rect, RectI32::from_ltrb(80, 48, 376, 236));
    }

    #[test]
    fn tiny_surface_keeps_a_positive_plot_area() {
        let chart = Chart::new();
        let opts = RenderOptions { draw_labels: false, ..RenderOptions::with_size(20, 20) };
        let rect = chart.plot_rect(&opts, None, &AxisTicks::default());
        assert!(rect.width() > 0 && rect.height() > 0);
    }

    #[test]
    fn persist_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/chart.png");
        persist(&out, b"first").unwrap();
        persist(&out, b"second").unwrap();
        assert_eq!(std::fs::read(&out).unwrap(), b"second");
        // only the target remains, no stray temp files
        assert_eq!(std::fs::read_dir(out.parent().unwrap()).unwrap().count(), 1);
    }
}
