//! Configuration management for logenv.
//!
//! This crate handles loading, validating and saving the `logenv.toml`
//! configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    CONFIG_FILE_NAME, find_and_load_config_from, load_config, load_or_default, save_config,
};
pub use schema::{ChangelogConfig, Config, GreetingConfig, OnMissing, StepsConfig};
