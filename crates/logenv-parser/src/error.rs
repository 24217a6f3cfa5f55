//! Parser error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while obtaining a changelog.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The changelog path does not resolve to a file.
    #[error("changelog not found: {0}")]
    SourceNotFound(PathBuf),

    /// The changelog exists but could not be read.
    #[error("failed to read changelog {path}: {source}")]
    SourceReadFailure {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// Returns the path of the changelog involved.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::SourceNotFound(path) | Self::SourceReadFailure { path, .. } => path,
        }
    }
}

/// Result type for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;
