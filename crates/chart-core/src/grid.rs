// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers for linear and log10 axes.

use crate::axis::{Axis, ScaleKind};

/// Target number of major ticks on a linear axis.
const LINEAR_TICK_TARGET: usize = 8;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round `span / target` up to the next 1, 2 or 5 times a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span.abs() / target.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Multiples of a nice step lying within `[min, max]`.
pub fn linear_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Vec::new();
    }
    let step = nice_step(max - min, target);
    let first = (min / step - 1e-9).ceil() * step;
    let last = (max / step + 1e-9).floor() * step;
    if last < first {
        return Vec::new();
    }
    let count = ((last - first) / step).round() as usize + 1;
    let ticks = if count == 1 { vec![first] } else { linspace(first, last, count) };
    // snap -0.0 and float dust to zero
    ticks
        .into_iter()
        .map(|v| if v.abs() < step * 1e-9 { 0.0 } else { v })
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogTicks {
    /// Exponents `k` of the decades `10^k` inside the range.
    pub decades: Vec<i32>,
    /// `m * 10^k` for `m` in 2..=9 inside the range.
    pub minor: Vec<f64>,
}

pub fn log_ticks(min: f64, max: f64) -> LogTicks {
    let mut out = LogTicks::default();
    if min.is_nan() || min <= 0.0 || !max.is_finite() || max <= min {
        return out;
    }
    let inside = |v: f64| v >= min * (1.0 - 1e-9) && v <= max * (1.0 + 1e-9);
    let lo = min.log10().floor() as i32;
    let hi = max.log10().ceil() as i32;
    for k in lo..=hi {
        let base = 10f64.powi(k);
        if inside(base) {
            out.decades.push(k);
        }
        for m in 2..=9 {
            let v = base * m as f64;
            if inside(v) {
                out.minor.push(v);
            }
        }
    }
    out
}

/// Format a linear tick with just enough decimals for `step`.
pub fn format_tick(v: f64, step: f64) -> String {
    let decimals = if step >= 1.0 || step <= 0.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    format!("{:.*}", decimals, v)
}

/// Format a single value with one significant digit past its magnitude.
pub fn format_value(v: f64) -> String {
    if v == 0.0 || !v.is_finite() {
        return format!("{v}");
    }
    let decimals = (-v.abs().log10().floor()).max(0.0) as usize;
    format!("{:.*}", decimals, v)
}

/// `10` followed by the exponent in superscript digits, e.g. `10³`, `10⁻²`.
pub fn format_decade(exp: i32) -> String {
    const SUPERSCRIPTS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    let mut s = String::from("10");
    if exp < 0 {
        s.push('⁻');
    }
    for d in exp.unsigned_abs().to_string().bytes() {
        s.push(SUPERSCRIPTS[(d - b'0') as usize]);
    }
    s
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: Option<String>,
}

/// Major (gridded, labelled) and minor ticks for one axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisTicks {
    pub major: Vec<Tick>,
    pub minor: Vec<Tick>,
}

impl AxisTicks {
    pub fn for_axis(axis: &Axis) -> Self {
        match axis.kind {
            ScaleKind::Linear => {
                let step = nice_step(axis.max - axis.min, LINEAR_TICK_TARGET);
                let major = linear_ticks(axis.min, axis.max, LINEAR_TICK_TARGET)
                    .into_iter()
                    .map(|value| Tick { value, label: Some(format_tick(value, step)) })
                    .collect();
                Self { major, minor: Vec::new() }
            }
            ScaleKind::Log10 => {
                let lt = log_ticks(axis.min, axis.max);
                // Less than two labelled decades reads as an unlabelled axis,
                // so the minor ticks get labels too.
                let label_minor = lt.decades.len() < 2;
                let major = lt
                    .decades
                    .iter()
                    .map(|&k| Tick { value: 10f64.powi(k), label: Some(format_decade(k)) })
                    .collect();
                let minor = lt
                    .minor
                    .iter()
                    .map(|&value| Tick { value, label: label_minor.then(|| format_value(value)) })
                    .collect();
                Self { major, minor }
            }
        }
    }

    /// Every tick carrying a label, majors first.
    pub fn labelled(&self) -> impl Iterator<Item = (f64, &str)> + '_ {
        self.major
            .iter()
            .chain(self.minor.iter())
            .filter_map(|t| t.label.as_deref().map(|l| (t.value, l)))
    }
}
