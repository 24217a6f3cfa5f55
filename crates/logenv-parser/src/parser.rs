//! Changelog line scanner.

use std::sync::LazyLock;

use logenv_commit::CommitRecord;
use regex::Regex;
use tracing::{debug, warn};

static COMMITTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"committer (.*?) <").expect("invalid regex"));

/// Prefix that marks a line as commit message text.
pub const MESSAGE_INDENT: &str = "    ";

/// Outcome of scanning a changelog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Records in the order their committer markers appeared.
    pub records: Vec<CommitRecord>,

    /// Message lines that appeared before any committer marker.
    pub orphaned_lines: usize,
}

/// The record currently being accumulated.
struct OpenRecord {
    committer: String,
    message: String,
}

impl OpenRecord {
    fn finish(self) -> CommitRecord {
        CommitRecord::new(self.message, self.committer)
    }
}

/// Scans changelog lines into commit records.
///
/// A line containing `committer <name> <` opens a new record and closes the
/// previous one. Lines starting with four spaces append to the open record's
/// message, minus the indent and with no separator. Everything else is
/// skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangelogParser;

impl ChangelogParser {
    /// Creates a new changelog parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parses lines into commit records.
    pub fn parse<I, S>(&self, lines: I) -> Vec<CommitRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.parse_report(lines).records
    }

    /// Parses a whole changelog held in memory.
    pub fn parse_str(&self, content: &str) -> Vec<CommitRecord> {
        self.parse(content.lines())
    }

    /// Parses lines and also reports message lines that had no committer.
    pub fn parse_report<I, S>(&self, lines: I) -> ParseReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = ParseReport::default();
        let mut open: Option<OpenRecord> = None;

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();

            if let Some(committer) = Self::committer(line) {
                debug!(line = index + 1, committer, "found committer");
                if let Some(record) = open.take() {
                    report.records.push(record.finish());
                }
                open = Some(OpenRecord {
                    committer: committer.to_string(),
                    message: String::new(),
                });
            } else if let Some(text) = line.strip_prefix(MESSAGE_INDENT) {
                if let Some(record) = open.as_mut() {
                    debug!(line = index + 1, text, "found message line");
                    record.message.push_str(text);
                } else {
                    warn!(
                        line = index + 1,
                        text, "ignoring message line before any committer"
                    );
                    report.orphaned_lines += 1;
                }
            }
        }

        if let Some(record) = open {
            report.records.push(record.finish());
        }

        report
    }

    /// Extracts the committer name if the line is a committer marker.
    #[allow(clippy::redundant_closure_for_method_calls)]
    fn committer(line: &str) -> Option<&str> {
        COMMITTER_RE.captures(line)?.get(1).map(|m| m.as_str())
    }
}
