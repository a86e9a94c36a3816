// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges and scale kind.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear }
    }

    /// Logarithmic axis. `min`/`max` must be positive to be meaningful;
    /// the scale clamps them otherwise.
    pub fn log10(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Log10 }
    }

    pub fn with_kind(mut self, kind: ScaleKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_log(&self) -> bool {
        self.kind == ScaleKind::Log10
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 1.0)
    }

    /// Range used when there is no data to fit, per scale kind.
    pub fn empty_range(kind: ScaleKind) -> (f64, f64) {
        match kind {
            ScaleKind::Linear => (0.0, 1.0),
            ScaleKind::Log10 => (1.0, 10.0),
        }
    }
}
