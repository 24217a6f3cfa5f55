//! Steps command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use logenv_core::Pipeline;

use super::{create_registry, resolve_config};

/// Arguments for the steps command.
#[derive(Debug, Args)]
pub struct StepsArgs {
    /// Configuration file (default: search for logenv.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Runs the steps command.
pub fn run(args: &StepsArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    let pipeline = Pipeline::new(create_registry(&config)?, &config);
    let registry = pipeline.registry();

    for name in registry.names() {
        let Some(step) = registry.get(name) else {
            continue;
        };
        let marker = if pipeline.enabled().iter().any(|n| n == name) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {name:<12} {:<18} {}",
            step.display_name(),
            step.description()
        );
    }

    Ok(())
}
