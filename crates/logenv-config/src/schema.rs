//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Changelog step configuration.
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// Greeting step configuration.
    #[serde(default)]
    pub greeting: GreetingConfig,

    /// Which steps run, in order.
    #[serde(default)]
    pub steps: StepsConfig,
}

impl Config {
    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.changelog.file.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "changelog.file must not be empty".to_string(),
            ));
        }

        let variable = &self.changelog.variable;
        let valid_variable = variable
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && variable
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_variable {
            return Err(ConfigError::Invalid(format!(
                "changelog.variable is not a valid environment variable name: {variable:?}"
            )));
        }

        Ok(())
    }
}

/// What the changelog step does when the changelog cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnMissing {
    /// Fail the step.
    #[default]
    Fail,
    /// Warn and inject an empty value.
    Empty,
}

/// Changelog step configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogConfig {
    /// Changelog file name, relative to the build directory.
    #[serde(default = "default_changelog_file")]
    pub file: String,

    /// Environment variable receiving the joined changelog.
    #[serde(default = "default_variable")]
    pub variable: String,

    /// Separator placed between commits.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Behavior when the changelog is unavailable.
    #[serde(default)]
    pub on_missing: OnMissing,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: default_changelog_file(),
            variable: default_variable(),
            separator: default_separator(),
            on_missing: OnMissing::default(),
        }
    }
}

fn default_changelog_file() -> String {
    "changelog.xml".to_string()
}

fn default_variable() -> String {
    "CHANGELOG".to_string()
}

fn default_separator() -> String {
    "\n----\n".to_string()
}

/// Greeting step configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingConfig {
    /// Who to greet.
    #[serde(default = "default_name")]
    pub name: String,

    /// Greet in French instead of English.
    #[serde(default)]
    pub use_french: bool,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            use_french: false,
        }
    }
}

fn default_name() -> String {
    "world".to_string()
}

/// Step selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepsConfig {
    /// Step names to run, in order.
    #[serde(default = "default_enabled")]
    pub enabled: Vec<String>,
}

impl Default for StepsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

fn default_enabled() -> Vec<String> {
    vec!["changelog".to_string(), "greeting".to_string()]
}
