//! Error types for Arbor Core

use thiserror::Error;

/// Result type alias using Arbor's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Arbor error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("No node in graph with URI {0}")]
    NodeNotFound(String),

    #[error("No node in hierarchy at path {0}")]
    PathNotFound(String),

    #[error("Cannot create an empty path")]
    EmptyPath,

    #[error("Cycle detected through {0}")]
    CycleDetected(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
