//! Reading changelogs from disk.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use logenv_commit::CommitRecord;
use tracing::debug;

use crate::{ChangelogParser, ParseError, ParseResult};

/// Reads a changelog file into lines.
///
/// The file must be UTF-8. Line endings (`\n` or `\r\n`) are stripped.
///
/// # Errors
///
/// Returns [`ParseError::SourceNotFound`] if the path does not exist and
/// [`ParseError::SourceReadFailure`] for any other IO failure.
pub fn read_lines(path: impl AsRef<Path>) -> ParseResult<Vec<String>> {
    let path = path.as_ref();
    debug!(?path, "reading changelog");

    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ParseError::SourceNotFound(path.to_path_buf()),
        _ => ParseError::SourceReadFailure {
            path: path.to_path_buf(),
            source,
        },
    })?;

    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| ParseError::SourceReadFailure {
            path: path.to_path_buf(),
            source,
        })
}

/// Reads and parses a changelog file.
///
/// # Errors
///
/// Returns an error if the file cannot be read (see [`read_lines`]).
pub fn parse_file(path: impl AsRef<Path>) -> ParseResult<Vec<CommitRecord>> {
    let lines = read_lines(path)?;
    Ok(ChangelogParser::new().parse(&lines))
}
