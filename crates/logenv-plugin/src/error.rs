//! Plugin error types.

use thiserror::Error;

/// Plugin-related errors.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Plugin execution failed.
    #[error("plugin execution failed: {0}")]
    ExecutionFailed(String),

    /// Configuration error.
    #[error("plugin configuration error: {0}")]
    ConfigError(String),
}

/// Result type for plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;
