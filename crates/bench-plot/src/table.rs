// File: crates/bench-plot/src/table.rs
// Summary: Measurement Table loaded from the benchmark CSV with a one-time schema check.

use std::fs::File;
use std::io;
use std::path::Path;

use log::{debug, info};

use crate::error::LoadError;

pub const N: &str = "n";
pub const TIME_INSERT: &str = "time_insert";
pub const TIME_RANGE: &str = "time_range";

/// Columns every input must carry, in the order they are checked.
pub const REQUIRED_COLUMNS: [&str; 3] = [N, TIME_INSERT, TIME_RANGE];

/// One benchmark row: point count and the two measured timings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub n: f64,
    pub time_insert: f64,
    pub time_range: f64,
}

impl Measurement {
    /// Value of a named column as f64.
    pub fn get(&self, column: &str) -> Option<f64> {
        match column {
            N => Some(self.n),
            TIME_INSERT => Some(self.time_insert),
            TIME_RANGE => Some(self.time_range),
            _ => None,
        }
    }
}

/// Rows in file order. Immutable once loaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeasurementTable {
    rows: Vec<Measurement>,
}

impl MeasurementTable {
    pub fn new(rows: Vec<Measurement>) -> Self {
        Self { rows }
    }

    /// Load the table from a comma-delimited file with a header row.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoadError::ResourceNotFound { path: path.to_path_buf() },
            _ => LoadError::Io { path: path.to_path_buf(), source },
        })?;
        Self::from_reader(file, path)
    }

    /// Parse CSV from `reader`; `source` only names the input in errors and logs.
    pub fn from_reader<R: io::Read>(reader: R, source: &Path) -> Result<Self, LoadError> {
        let malformed = |e: csv::Error| LoadError::Malformed { path: source.to_path_buf(), source: e };

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers().map_err(malformed)?.clone();
        debug!("headers in {}: {:?}", source.display(), headers);

        let idx = |column: &'static str| -> Result<usize, LoadError> {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| LoadError::Schema { path: source.to_path_buf(), column })
        };
        let (i_n, i_insert, i_range) = (idx(N)?, idx(TIME_INSERT)?, idx(TIME_RANGE)?);

        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec.map_err(malformed)?;
            let line = rec.position().map(|p| p.line()).unwrap_or(0);
            let bad = |column: &'static str, value: &str| LoadError::Parse {
                path: source.to_path_buf(),
                line,
                column,
                value: value.to_string(),
            };
            // non-flexible reader: every record has the header's width
            let cell = |i: usize| rec.get(i).unwrap_or("");

            let n = parse_number(cell(i_n)).ok_or_else(|| bad(N, cell(i_n)))?;
            let time_insert = parse_number(cell(i_insert)).ok_or_else(|| bad(TIME_INSERT, cell(i_insert)))?;
            let time_range = parse_number(cell(i_range)).ok_or_else(|| bad(TIME_RANGE, cell(i_range)))?;
            rows.push(Measurement { n, time_insert, time_range });
        }

        info!("loaded {} measurements from {}", rows.len(), source.display());
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Measurement] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// A named column as f64 values in row order, `None` for unknown names.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        if !REQUIRED_COLUMNS.contains(&name) {
            return None;
        }
        self.rows.iter().map(|r| r.get(name)).collect()
    }

    /// `(n, column)` pairs in row order, the shape a chart series takes.
    pub fn xy(&self, column: &str) -> Option<Vec<(f64, f64)>> {
        let ys = self.column(column)?;
        Some(self.rows.iter().map(|r| r.n).zip(ys).collect())
    }
}

/// Integer or decimal cell; NaN and infinities are refused so every row can be drawn.
fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}
