// File: crates/chart-core/src/legend.rs
// Summary: Legend box listing labelled series with their line and marker sample.

use skia_safe as skia;

use crate::chart::draw_marker;
use crate::geometry::RectI32;
use crate::series::Marker;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;

const PAD: f32 = 8.0;
const ROW_HEIGHT: f32 = 22.0;
const SAMPLE_WIDTH: f32 = 28.0;
const GAP: f32 = 8.0;
const FONT_SIZE: f32 = 13.0;

pub struct LegendEntry<'a> {
    pub label: &'a str,
    pub color: skia::Color,
    pub marker: Marker,
}

/// Legend box pinned to the upper-left corner of `plot`.
pub fn legend_rect(plot: RectI32, entries: &[LegendEntry<'_>], shaper: Option<&TextShaper>) -> skia::Rect {
    let label_w = shaper
        .map(|sh| entries.iter().map(|e| sh.measure_width(e.label, FONT_SIZE)).fold(0.0, f32::max))
        .unwrap_or(0.0);
    let w = PAD * 2.0 + SAMPLE_WIDTH + GAP + label_w;
    let h = PAD * 2.0 + ROW_HEIGHT * entries.len() as f32;
    let left = plot.left as f32 + 10.0;
    let top = plot.top as f32 + 10.0;
    skia::Rect::from_xywh(left, top, w, h)
}

/// Center of the line+marker sample for entry `index` inside a legend `rect`.
pub fn sample_center(rect: skia::Rect, index: usize) -> (f32, f32) {
    let cy = rect.top + PAD + ROW_HEIGHT * (index as f32 + 0.5);
    (rect.left + PAD + SAMPLE_WIDTH * 0.5, cy)
}

pub fn draw_legend(
    canvas: &skia::Canvas,
    plot: RectI32,
    entries: &[LegendEntry<'_>],
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    if entries.is_empty() {
        return;
    }
    let rect = legend_rect(plot, entries, shaper);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.legend_background);
    canvas.draw_rect(rect, &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_rect(rect, &border);

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);

    for (i, e) in entries.iter().enumerate() {
        let (cx, cy) = sample_center(rect, i);
        let (x0, x1) = (cx - SAMPLE_WIDTH * 0.5, cx + SAMPLE_WIDTH * 0.5);
        stroke.set_color(e.color);
        canvas.draw_line((x0, cy), (x1, cy), &stroke);
        draw_marker(canvas, e.marker, (cx, cy), e.color);

        if let Some(sh) = shaper {
            sh.draw(canvas, e.label, (x1 + GAP, cy), Anchor::CenterLeft, FONT_SIZE, theme.axis_label);
        }
    }
}
