//! Changelog parsing for logenv.
//!
//! Turns the line-oriented changelog a build leaves behind into an ordered
//! list of [`CommitRecord`]s:
//! - [`ChangelogParser`]: Scans lines for committer markers and message lines
//! - [`read_lines`] / [`parse_file`]: Read a changelog from disk
//!
//! [`CommitRecord`]: logenv_commit::CommitRecord

mod error;
mod parser;
mod source;

pub use error::{ParseError, ParseResult};
pub use parser::{ChangelogParser, MESSAGE_INDENT, ParseReport};
pub use source::{parse_file, read_lines};
