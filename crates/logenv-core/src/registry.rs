//! Host-owned registry of build steps.

use logenv_plugin::{BuildContext, BuildStep};
use tracing::{debug, info};

use crate::{CoreError, CoreResult};

/// Holds the steps a host knows about, keyed by plugin name.
///
/// Steps keep their registration order.
#[derive(Default)]
pub struct StepRegistry {
    steps: Vec<Box<dyn BuildStep>>,
}

impl StepRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a step.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateStep`] if a step with the same name is
    /// already registered.
    pub fn register(&mut self, step: Box<dyn BuildStep>) -> CoreResult<()> {
        if self.get(step.name()).is_some() {
            return Err(CoreError::DuplicateStep(step.name().to_string()));
        }
        debug!(step = step.name(), "registered step");
        self.steps.push(step);
        Ok(())
    }

    /// Registers a step, builder style.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already taken.
    pub fn with_step(mut self, step: Box<dyn BuildStep>) -> CoreResult<Self> {
        self.register(step)?;
        Ok(self)
    }

    /// Looks up a step by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn BuildStep> {
        self.steps
            .iter()
            .find(|step| step.name() == name)
            .map(AsRef::as_ref)
    }

    /// Returns the registered step names.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Returns the number of registered steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if no steps are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs the named steps in the given order.
    ///
    /// Steps that report themselves not applicable are skipped. Execution
    /// stops at the first failure.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownStep`] before running anything if a name
    /// is not registered, or [`CoreError::StepFailed`] if a step fails.
    pub fn run<S: AsRef<str>>(&self, order: &[S], ctx: &mut BuildContext) -> CoreResult<()> {
        let steps = order
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .ok_or_else(|| CoreError::UnknownStep(name.to_string()))
            })
            .collect::<CoreResult<Vec<_>>>()?;

        for step in steps {
            if !step.is_applicable(ctx) {
                info!(step = step.name(), "step not applicable, skipping");
                continue;
            }

            info!(step = step.name(), display = step.display_name(), "running step");
            step.execute(ctx).map_err(|source| CoreError::StepFailed {
                step: step.name().to_string(),
                source,
            })?;
        }

        Ok(())
    }
}
