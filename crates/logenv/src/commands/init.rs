//! Initialize command.

use anyhow::{Context, Result, bail};
use clap::Args;
use logenv_config::{CONFIG_FILE_NAME, Config, save_config};

/// Arguments for the init command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Greet in French
    #[arg(long)]
    pub french: bool,

    /// Name for the greeting step
    #[arg(long)]
    pub name: Option<String>,
}

/// Runs the init command.
pub fn run(args: &InitArgs) -> Result<()> {
    let path = std::env::current_dir()?.join(CONFIG_FILE_NAME);

    if path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let mut config = Config::default();
    config.greeting.use_french = args.french;
    if let Some(name) = &args.name {
        config.greeting.name.clone_from(name);
    }
    config.validate()?;

    save_config(&path, &config)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {CONFIG_FILE_NAME}");

    Ok(())
}
