//! Greeting build step.
//!
//! Logs a greeting in English or French depending on the global
//! `use_french` switch. Has no influence on the environment.

use std::fmt;

use logenv_plugin::{BuildContext, BuildStep, Plugin, PluginError, PluginResult};
use tracing::info;

/// Names shorter than this get a warning.
const MIN_NAME_LEN: usize = 4;

/// Outcome of validating a configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The value is fine.
    Ok,
    /// The value is usable but suspicious.
    Warning(String),
    /// The value is unusable.
    Error(String),
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Warning(msg) => write!(f, "warning: {msg}"),
            Self::Error(msg) => write!(f, "error: {msg}"),
        }
    }
}

/// Validates the name to greet.
pub fn validate_name(value: &str) -> Validation {
    if value.is_empty() {
        return Validation::Error("Please set a name".to_string());
    }
    if value.chars().count() < MIN_NAME_LEN {
        return Validation::Warning("Isn't the name too short?".to_string());
    }
    Validation::Ok
}

/// Greets someone in the build log.
pub struct GreetingStep {
    name: String,
}

impl GreetingStep {
    /// Creates a greeting step for the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Builds the greeting line.
    #[must_use]
    pub fn greeting(&self, use_french: bool) -> String {
        if use_french {
            format!("Bonjour, {}!", self.name)
        } else {
            format!("Hello, {}!", self.name)
        }
    }
}

impl Plugin for GreetingStep {
    fn name(&self) -> &'static str {
        "greeting"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Greets the configured name in the build log"
    }
}

impl BuildStep for GreetingStep {
    fn display_name(&self) -> &'static str {
        "Greeting"
    }

    fn execute(&self, ctx: &mut BuildContext) -> PluginResult<()> {
        if let Validation::Error(msg) = validate_name(&self.name) {
            return Err(PluginError::ConfigError(msg));
        }

        info!("{}", self.greeting(ctx.use_french));
        Ok(())
    }
}
