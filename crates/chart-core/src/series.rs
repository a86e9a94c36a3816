// File: crates/chart-core/src/series.rs
// Summary: Series model for labelled line+marker data.

/// Point marker drawn at every data point of a series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    None,
    Circle,
    Square,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub label: Option<String>,
    pub marker: Marker,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn new() -> Self {
        Self { label: None, marker: Marker::None, data_xy: Vec::new() }
    }

    pub fn with_data(data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, ..Self::new() }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.data_xy.is_empty()
    }

    /// X values in data order.
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.data_xy.iter().map(|&(x, _)| x)
    }
}

impl Default for Series {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_data_order() {
        let s = Series::with_data(vec![(3.0, 1.0), (1.0, 2.0)])
            .with_label("a")
            .with_marker(Marker::Square);
        assert_eq!(s.xs().collect::<Vec<_>>(), vec![3.0, 1.0]);
        assert_eq!(s.label.as_deref(), Some("a"));
        assert_eq!(s.marker, Marker::Square);
    }
}
