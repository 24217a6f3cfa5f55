//! Joining commit records into a single text blob.

use crate::CommitRecord;

/// Placed between a record's message and its committer.
pub const COMMITTER_DELIMITER: &str = " - ";

/// Placed between consecutive records.
pub const RECORD_SEPARATOR: &str = "\n----\n";

/// Joins records with the default [`RECORD_SEPARATOR`].
///
/// Each record renders as `message - committer`. An empty slice yields an
/// empty string.
#[must_use]
pub fn join_records(records: &[CommitRecord]) -> String {
    join_records_with(records, RECORD_SEPARATOR)
}

/// Joins records with a custom separator.
#[must_use]
pub fn join_records_with(records: &[CommitRecord], separator: &str) -> String {
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
