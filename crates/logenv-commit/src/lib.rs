//! Commit record types for logenv.
//!
//! This crate provides the types shared by the parser and the build steps:
//! - [`CommitRecord`]: One commit's message and its committer
//! - [`join_records`]: Flattens records into the single `CHANGELOG` blob

mod join;
mod record;

pub use join::{COMMITTER_DELIMITER, RECORD_SEPARATOR, join_records, join_records_with};
pub use record::CommitRecord;
