//! CLI definition.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Inject a build's changelog into the environment of later build steps.
#[derive(Debug, Parser)]
#[command(name = "logenv")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the enabled build steps and print the resulting environment
    Run(commands::run::RunArgs),

    /// Parse a changelog file and print the joined commit messages
    Parse(commands::parse::ParseArgs),

    /// Validate the name used by the greeting step
    CheckName(commands::check_name::CheckNameArgs),

    /// Write a default logenv.toml
    Init(commands::init::InitArgs),

    /// List the available build steps
    Steps(commands::steps::StepsArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Run(args) => commands::run::run(args),
            Commands::Parse(args) => commands::parse::run(args),
            Commands::CheckName(args) => commands::check_name::run(&args),
            Commands::Init(args) => commands::init::run(&args),
            Commands::Steps(args) => commands::steps::run(&args),
        }
    }
}
