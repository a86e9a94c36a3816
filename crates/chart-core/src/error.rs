// File: crates/chart-core/src/error.rs
// Summary: Error type for surface allocation, encoding and persistence failures.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error("cannot write chart to '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
