//! Build step trait.

use super::Plugin;
use crate::{BuildContext, PluginResult};

/// A unit of work the host runs during a build.
///
/// Steps read what they need from the [`BuildContext`] and contribute
/// environment entries for the steps that follow.
pub trait BuildStep: Plugin {
    /// Human readable name shown by the host.
    fn display_name(&self) -> &'static str {
        self.name()
    }

    /// Returns whether this step can run for the given build.
    ///
    /// Steps apply to every build unless they say otherwise.
    fn is_applicable(&self, _ctx: &BuildContext) -> bool {
        true
    }

    /// Runs the step.
    ///
    /// # Errors
    ///
    /// Returns an error if the step cannot complete; the host decides whether
    /// the build continues.
    fn execute(&self, ctx: &mut BuildContext) -> PluginResult<()>;
}
