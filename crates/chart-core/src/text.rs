// File: crates/chart-core/src/text.rs
// Summary: Simple text shaper/renderer using Skia textlayout with sensible defaults.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Where a text box is pinned relative to the given point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    TopCenter,
    CenterLeft,
    CenterRight,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0));
        // width of the longest line
        p.longest_line()
    }

    /// Draw `text` with its box pinned at `(x, y)` according to `anchor`.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        anchor: Anchor,
        size: f32,
        color: skia::Color,
    ) {
        let p = self.layout(text, size, color);
        let (w, h) = (p.longest_line(), p.height());
        let origin = match anchor {
            Anchor::TopCenter => (x - w * 0.5, y),
            Anchor::CenterLeft => (x, y - h * 0.5),
            Anchor::CenterRight => (x - w, y - h * 0.5),
        };
        p.paint(canvas, origin);
    }

    /// Draw `text` rotated 90° counter-clockwise, centered on `(cx, cy)`.
    pub fn draw_vertical(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (cx, cy): (f32, f32),
        size: f32,
        color: skia::Color,
    ) {
        let p = self.layout(text, size, color);
        let (w, h) = (p.longest_line(), p.height());
        canvas.save();
        canvas.translate((cx, cy));
        canvas.rotate(-90.0, None);
        p.paint(canvas, (-w * 0.5, -h * 0.5));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
