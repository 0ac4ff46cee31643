//! Error types for the OBO Graphs loader

use thiserror::Error;

/// Result type alias using the loader's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Loader error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid OBO Graphs JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document contains no graphs")]
    NoGraphs,
}
