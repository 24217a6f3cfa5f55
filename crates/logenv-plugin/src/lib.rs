//! Plugin system for logenv.
//!
//! This crate provides the plugin traits and infrastructure:
//! - [`Plugin`]: Base trait for all plugins
//! - [`BuildStep`]: A unit of work executed during a build
//! - [`BuildContext`]: Per-build state, including the environment handed to
//!   later steps

mod context;
mod error;
mod traits;

pub use context::BuildContext;
pub use error::{PluginError, PluginResult};
pub use traits::Plugin;
pub use traits::step::BuildStep;
