//! Core error types.

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A step name is not registered.
    #[error("unknown step: {0}")]
    UnknownStep(String),

    /// A step name was registered twice.
    #[error("step already registered: {0}")]
    DuplicateStep(String),

    /// A step failed while executing.
    #[error("step '{step}' failed: {source}")]
    StepFailed {
        /// Name of the failing step.
        step: String,
        /// Error reported by the step.
        #[source]
        source: logenv_plugin::PluginError,
    },

    /// Environment could not be rendered.
    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
