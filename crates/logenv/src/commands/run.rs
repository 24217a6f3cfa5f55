//! Run command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use logenv_core::{EnvFormat, Pipeline, render_env};
use logenv_step_changelog::COMMITS_METADATA_KEY;
use tracing::info;

use super::{create_registry, resolve_config};

/// Output format argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// export KEY='value' lines
    Shell,
    /// KEY="value" lines
    Dotenv,
    /// JSON object
    Json,
}

impl From<FormatArg> for EnvFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Shell => EnvFormat::Shell,
            FormatArg::Dotenv => EnvFormat::Dotenv,
            FormatArg::Json => EnvFormat::Json,
        }
    }
}

/// Arguments for the run command.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Build directory containing the changelog
    #[arg(short, long, env = "LOGENV_BUILD_DIR", default_value = ".")]
    pub build_dir: PathBuf,

    /// Configuration file (default: search for logenv.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "shell")]
    pub format: FormatArg,

    /// Write the environment to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Runs the run command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: RunArgs) -> Result<()> {
    let config = resolve_config(args.config.as_deref())?;
    let registry = create_registry(&config)?;
    let pipeline = Pipeline::new(registry, &config);

    let ctx = pipeline
        .run(&args.build_dir)
        .context("build steps failed")?;

    if let Some(commits) = ctx.get_metadata(COMMITS_METADATA_KEY) {
        info!(%commits, "changelog injected");
    }

    let rendered = render_env(ctx.env(), args.format.into())?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "environment written");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
