//! Error types for reelgraph operations.

use std::io;
use thiserror::Error;

/// The error type for reelgraph operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading dataset files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Graph or priority-queue operation failed.
    #[error("graph error: {0}")]
    Core(#[from] reelgraph_core::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dataset file could not be interpreted.
    #[error("invalid dataset: {0}")]
    InvalidFormat(String),

    /// A movie id was not found in the loaded dataset or graph.
    #[error("movie not found: {0}")]
    MovieNotFound(u32),

    /// Invalid configuration or arguments.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A specialized Result type for reelgraph operations.
pub type Result<T> = std::result::Result<T, Error>;
