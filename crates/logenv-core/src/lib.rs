//! Core library for logenv.
//!
//! This crate provides the host side of the build: a registry of steps, the
//! pipeline that runs them against a build directory, and rendering of the
//! resulting environment.

mod env;
mod error;
mod pipeline;
mod registry;

pub use env::{EnvFormat, render_env};
pub use error::{CoreError, CoreResult};
pub use pipeline::Pipeline;
pub use registry::StepRegistry;
