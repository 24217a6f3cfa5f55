//! Build pipeline execution.

use std::path::Path;

use logenv_config::Config;
use logenv_plugin::BuildContext;
use tracing::info;

use crate::{CoreResult, StepRegistry};

/// Runs the configured steps against a build directory.
pub struct Pipeline {
    registry: StepRegistry,
    enabled: Vec<String>,
    use_french: bool,
}

impl Pipeline {
    /// Creates a pipeline running `config.steps.enabled` from `registry`.
    #[must_use]
    pub fn new(registry: StepRegistry, config: &Config) -> Self {
        Self {
            registry,
            enabled: config.steps.enabled.clone(),
            use_french: config.greeting.use_french,
        }
    }

    /// Returns the step names this pipeline runs, in order.
    pub fn enabled(&self) -> &[String] {
        &self.enabled
    }

    /// Returns a reference to the registry.
    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    /// Creates the context handed to every step.
    pub fn context(&self, build_dir: impl AsRef<Path>) -> BuildContext {
        BuildContext::new(build_dir.as_ref()).use_french(self.use_french)
    }

    /// Runs every enabled step and returns the resulting context.
    ///
    /// # Errors
    ///
    /// Returns an error if a step is unknown or fails.
    pub fn run(&self, build_dir: impl AsRef<Path>) -> CoreResult<BuildContext> {
        let mut ctx = self.context(build_dir);
        info!(build_dir = ?ctx.build_dir, steps = ?self.enabled, "starting build steps");

        self.registry.run(&self.enabled, &mut ctx)?;

        info!(entries = ctx.env().len(), "build steps finished");
        Ok(ctx)
    }
}
