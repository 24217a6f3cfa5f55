//! Commit record extracted from a changelog.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::COMMITTER_DELIMITER;

/// One commit as read from a changelog: its message and who committed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// The commit message, with continuation lines concatenated.
    pub message: String,

    /// The committer display name.
    pub committer: String,
}

impl CommitRecord {
    /// Creates a new commit record.
    #[must_use]
    pub fn new(message: impl Into<String>, committer: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            committer: committer.into(),
        }
    }
}

impl fmt::Display for CommitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{COMMITTER_DELIMITER}{}", self.message, self.committer)
    }
}
