//! Error types for catalog loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading a catalog into a [`crate::Translator`].
///
/// Lookup itself never fails: a missing or unfinished translation falls back
/// to the source string.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a catalog file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Attempted to reload a catalog that was loaded from a string.
    #[error("cannot reload '{language}': was loaded from string, not file")]
    NoPathForReload { language: String },
}
