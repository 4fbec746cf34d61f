//! Error types for scenecast.
//!
//! Environmental failures surface through this enum and exit nonzero.
//! User-state conditions (no active editor, no definition before the cursor,
//! empty selection) are not errors: the command layer reports them through
//! the notifier port and aborts the action without further effect.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error produced by port implementations.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for scenecast operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Command-line arguments failed to parse.
    #[error("{0}")]
    Usage(String),

    /// The active document could not be read.
    #[error("failed to read document {path}: {source}")]
    DocumentRead {
        /// Path of the unreadable document.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The editor port failed.
    #[error("editor error: {0}")]
    Editor(#[source] BoxedError),

    /// The terminal sink could not be created or written to.
    #[error("terminal sink error: {0}")]
    Sink(#[source] BoxedError),

    /// Serializing a derived command for output failed.
    #[error("output serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Wraps a port failure from the editor boundary.
    pub fn editor(source: impl Into<BoxedError>) -> Self {
        Error::Editor(source.into())
    }

    /// Wraps a port failure from the terminal sink boundary.
    pub fn sink(source: impl Into<BoxedError>) -> Self {
        Error::Sink(source.into())
    }
}

/// Result type alias for scenecast operations.
pub type Result<T> = std::result::Result<T, Error>;
