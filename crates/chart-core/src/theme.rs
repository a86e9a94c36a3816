// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    /// Series colors, cycled by series index.
    pub palette: [skia::Color; 4],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 222, 222, 222),
            axis_line: skia::Color::from_argb(255, 30, 30, 30),
            axis_label: skia::Color::from_argb(255, 20, 20, 20),
            tick: skia::Color::from_argb(255, 30, 30, 30),
            title: skia::Color::from_argb(255, 0, 0, 0),
            legend_background: skia::Color::from_argb(220, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            palette: [
                skia::Color::from_argb(255, 0x1f, 0x77, 0xb4), // blue
                skia::Color::from_argb(255, 0xff, 0x7f, 0x0e), // orange
                skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c), // green
                skia::Color::from_argb(255, 0xd6, 0x27, 0x28), // red
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 245, 245, 250),
            legend_background: skia::Color::from_argb(220, 28, 28, 32),
            legend_border: skia::Color::from_argb(255, 70, 70, 78),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 255, 170, 60),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 220, 80, 80),
            ],
        }
    }

    /// Palette color for the `index`-th series.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name` (case-insensitive).
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
