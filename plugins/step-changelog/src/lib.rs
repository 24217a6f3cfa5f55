//! Changelog-to-environment build step.

use logenv_commit::{RECORD_SEPARATOR, join_records_with};
use logenv_parser::{ChangelogParser, read_lines};
use logenv_plugin::{BuildContext, BuildStep, Plugin, PluginError, PluginResult};
use serde_json::json;
use tracing::{info, warn};

/// Default changelog file name inside the build directory.
pub const DEFAULT_CHANGELOG_FILE: &str = "changelog.xml";

/// Default environment variable name.
pub const DEFAULT_VARIABLE: &str = "CHANGELOG";

/// Metadata key holding the number of commits injected.
pub const COMMITS_METADATA_KEY: &str = "changelog.commits";

/// Metadata key holding the number of message lines without a committer.
pub const ORPHANED_METADATA_KEY: &str = "changelog.orphaned_lines";

/// What to do when the changelog cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Fail the step.
    #[default]
    Fail,
    /// Warn and inject an empty value.
    Empty,
}

/// Reads the build changelog and exposes it as an environment variable.
pub struct ChangelogStep {
    /// Changelog file, relative to the build directory.
    file: String,
    /// Variable that receives the joined changelog.
    variable: String,
    /// Separator between commits.
    separator: String,
    /// Behavior on unreadable changelogs.
    on_missing: MissingPolicy,
    parser: ChangelogParser,
}

impl ChangelogStep {
    /// Creates a new changelog step with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            file: DEFAULT_CHANGELOG_FILE.to_string(),
            variable: DEFAULT_VARIABLE.to_string(),
            separator: RECORD_SEPARATOR.to_string(),
            on_missing: MissingPolicy::default(),
            parser: ChangelogParser::new(),
        }
    }

    /// Sets the changelog file name.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Sets the environment variable name.
    #[must_use]
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    /// Sets the separator placed between commits.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the behavior for unreadable changelogs.
    #[must_use]
    pub fn with_on_missing(mut self, on_missing: MissingPolicy) -> Self {
        self.on_missing = on_missing;
        self
    }

    /// Returns the changelog file name.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Returns the environment variable name.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Returns the commit separator.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Returns the unreadable-changelog behavior.
    #[must_use]
    pub fn on_missing(&self) -> MissingPolicy {
        self.on_missing
    }
}

impl Default for ChangelogStep {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for ChangelogStep {
    fn name(&self) -> &'static str {
        "changelog"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Injects the build's commit messages into an environment variable"
    }
}

impl BuildStep for ChangelogStep {
    fn display_name(&self) -> &'static str {
        "Changelog to ENV"
    }

    fn execute(&self, ctx: &mut BuildContext) -> PluginResult<()> {
        let path = ctx.build_path(&self.file);

        let lines = match read_lines(&path) {
            Ok(lines) => lines,
            Err(e) => match self.on_missing {
                MissingPolicy::Fail => {
                    return Err(PluginError::ExecutionFailed(format!(
                        "changelog unavailable: {e}"
                    )));
                }
                MissingPolicy::Empty => {
                    warn!(
                        path = %e.path().display(),
                        error = %e,
                        variable = %self.variable,
                        "changelog unavailable, injecting empty value"
                    );
                    ctx.add_env(&self.variable, "");
                    ctx.set_metadata(COMMITS_METADATA_KEY, json!(0));
                    ctx.set_metadata(ORPHANED_METADATA_KEY, json!(0));
                    return Ok(());
                }
            },
        };

        let report = self.parser.parse_report(&lines);
        let joined = join_records_with(&report.records, &self.separator);

        info!(
            commits = report.records.len(),
            variable = %self.variable,
            "MSG:\n{joined}"
        );

        ctx.add_env(&self.variable, joined);
        ctx.set_metadata(COMMITS_METADATA_KEY, json!(report.records.len()));
        ctx.set_metadata(ORPHANED_METADATA_KEY, json!(report.orphaned_lines));

        Ok(())
    }
}
