// File: crates/bench-plot/src/error.rs
// Summary: Loader and renderer error taxonomy.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading the measurement CSV. All are fatal to the run.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file not found: {}", path.display())]
    ResourceNotFound { path: PathBuf },

    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is missing required column `{column}`", path.display())]
    Schema { path: PathBuf, column: &'static str },

    #[error("'{}' line {line}: column `{column}` has invalid numeric value {value:?}", path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("malformed CSV in '{}'", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("series column `{column}` is not a column of the measurement table")]
    MissingColumn { column: String },

    #[error(transparent)]
    Chart(#[from] chart_core::ChartError),
}
