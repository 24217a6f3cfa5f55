//! Check-name command.

use anyhow::{Result, bail};
use clap::Args;
use logenv_step_greeting::{Validation, validate_name};

/// Arguments for the check-name command.
#[derive(Debug, Args)]
pub struct CheckNameArgs {
    /// Name to validate
    #[arg(default_value = "")]
    pub value: String,
}

/// Runs the check-name command.
pub fn run(args: &CheckNameArgs) -> Result<()> {
    match validate_name(&args.value) {
        Validation::Error(msg) => bail!("{msg}"),
        validation => println!("{validation}"),
    }
    Ok(())
}
