//! Parse command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use logenv_commit::{RECORD_SEPARATOR, join_records_with};
use logenv_parser::parse_file;

/// Arguments for the parse command.
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Changelog file to parse
    pub file: PathBuf,

    /// Separator placed between commits
    #[arg(short, long, default_value = RECORD_SEPARATOR)]
    pub separator: String,
}

/// Runs the parse command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: ParseArgs) -> Result<()> {
    let records = parse_file(&args.file).context("changelog unavailable")?;
    let joined = join_records_with(&records, &args.separator);

    if !joined.is_empty() {
        println!("{joined}");
    }

    Ok(())
}
