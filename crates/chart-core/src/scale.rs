// File: crates/chart-core/src/scale.rs
// Summary: Linear and log10 data-to-pixel transforms shared by both axes.

use crate::axis::{Axis, ScaleKind};

/// Smallest value a log scale will accept as an endpoint.
const LOG_EPS: f64 = 1e-12;

/// Maps an axis range onto a pixel interval. `start_px` is where the axis
/// minimum lands (left edge for X, bottom edge for Y), so Y scales simply
/// run "backwards" in screen space.
#[derive(Clone, Copy, Debug)]
pub struct Scale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: f64,
    pub vmax: f64,
    pub kind: ScaleKind,
    // endpoints in the transformed domain (log10 of vmin/vmax when log)
    lo: f64,
    hi: f64,
}

impl Scale {
    pub fn new_linear(start_px: f32, end_px: f32, vmin: f64, mut vmax: f64) -> Self {
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { start_px, end_px, vmin, vmax, kind: ScaleKind::Linear, lo: vmin, hi: vmax }
    }

    pub fn new_log10(start_px: f32, end_px: f32, mut vmin: f64, mut vmax: f64) -> Self {
        // Ensure strictly positive range for log scale
        vmin = if vmin <= LOG_EPS { LOG_EPS } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        Self {
            start_px,
            end_px,
            vmin,
            vmax,
            kind: ScaleKind::Log10,
            lo: vmin.log10(),
            hi: vmax.log10(),
        }
    }

    pub fn for_axis(axis: &Axis, start_px: f32, end_px: f32) -> Self {
        match axis.kind {
            ScaleKind::Linear => Self::new_linear(start_px, end_px, axis.min, axis.max),
            ScaleKind::Log10 => Self::new_log10(start_px, end_px, axis.min, axis.max),
        }
    }

    fn forward(&self, v: f64) -> Option<f64> {
        if !v.is_finite() {
            return None;
        }
        match self.kind {
            ScaleKind::Linear => Some(v),
            ScaleKind::Log10 if v > 0.0 => Some(v.log10()),
            ScaleKind::Log10 => None,
        }
    }

    /// Pixel position of `v`, or `None` when `v` cannot be placed on this
    /// scale (non-finite, or non-positive on a log scale).
    #[inline]
    pub fn to_px(&self, v: f64) -> Option<f32> {
        let t = self.forward(v)?;
        let span = (self.hi - self.lo).max(1e-12);
        Some(self.start_px + ((t - self.lo) / span) as f32 * (self.end_px - self.start_px))
    }

    /// Whether `v` falls inside the visible range.
    pub fn contains(&self, v: f64) -> bool {
        match self.forward(v) {
            Some(t) => t >= self.lo - 1e-9 && t <= self.hi + 1e-9,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_maps_endpoints() {
        let s = Scale::new_linear(100.0, 500.0, 0.0, 10.0);
        assert_eq!(s.to_px(0.0), Some(100.0));
        assert_eq!(s.to_px(10.0), Some(500.0));
        assert_eq!(s.to_px(5.0), Some(300.0));
    }

    #[test]
    fn y_scale_runs_bottom_up() {
        let s = Scale::new_linear(400.0, 100.0, 0.0, 1.0);
        assert_eq!(s.to_px(0.0), Some(400.0));
        assert_eq!(s.to_px(1.0), Some(100.0));
    }

    #[test]
    fn log_scale_spaces_decades_evenly() {
        let s = Scale::new_log10(300.0, 0.0, 1.0, 1000.0);
        let p1 = s.to_px(1.0).unwrap();
        let p10 = s.to_px(10.0).unwrap();
        let p100 = s.to_px(100.0).unwrap();
        assert!(((p1 - p10) - (p10 - p100)).abs() < 1e-3);
        assert!((p1 - 300.0).abs() < 1e-3);
        assert!((p100 - 100.0).abs() < 1e-3);
    }

    #[test]
    fn log_scale_rejects_non_positive() {
        let s = Scale::new_log10(300.0, 0.0, 1.0, 100.0);
        assert_eq!(s.to_px(0.0), None);
        assert_eq!(s.to_px(-3.0), None);
        assert!(!s.contains(0.0));
        assert!(s.contains(50.0));
        assert!(!s.contains(500.0));
    }

    #[test]
    fn degenerate_ranges_are_widened() {
        let s = Scale::new_log10(0.0, 100.0, 0.0, -1.0);
        assert!(s.vmin > 0.0 && s.vmax > s.vmin);
        let s = Scale::new_linear(0.0, 100.0, 2.0, 2.0);
        assert_eq!(s.vmax, 3.0);
    }
}
