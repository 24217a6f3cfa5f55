//! CLI commands.

pub mod check_name;
pub mod init;
pub mod parse;
pub mod run;
pub mod steps;

use std::path::Path;

use anyhow::{Context, Result};
use logenv_config::{Config, OnMissing, load_config, load_or_default};
use logenv_core::StepRegistry;
use logenv_step_changelog::{ChangelogStep, MissingPolicy};
use logenv_step_greeting::GreetingStep;

/// Loads the explicit configuration file, or searches from the working
/// directory and falls back to defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))
    } else {
        let current_dir = std::env::current_dir()?;
        load_or_default(&current_dir).context("failed to load configuration")
    }
}

/// Creates the changelog step from configuration.
fn create_changelog_step(config: &Config) -> ChangelogStep {
    let on_missing = match config.changelog.on_missing {
        OnMissing::Fail => MissingPolicy::Fail,
        OnMissing::Empty => MissingPolicy::Empty,
    };

    ChangelogStep::new()
        .with_file(&config.changelog.file)
        .with_variable(&config.changelog.variable)
        .with_separator(&config.changelog.separator)
        .with_on_missing(on_missing)
}

/// Registers every step this host ships with.
pub fn create_registry(config: &Config) -> Result<StepRegistry> {
    let registry = StepRegistry::new()
        .with_step(Box::new(create_changelog_step(config)))?
        .with_step(Box::new(GreetingStep::new(&config.greeting.name)))?;
    Ok(registry)
}
