//! osz-cleaner - batch scrubber of osu! beatmap archives.
//!
//! Reads a zip of `.osz` archives and writes cleaned copies into the output directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use osz_cleaner::{Cleaner, Config};

#[derive(Parser)]
#[command(name = "osz-cleaner")]
#[command(about = "Strips identifying metadata and gameplay sections from osu! beatmap archives")]
#[command(version)]
struct Cli {
    /// Zip holding one `.osz` per beatmap
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output directory of the cleaned archives (emptied on start)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Staging directory (emptied on start)
    #[arg(long)]
    workspace: Option<PathBuf>,

    /// Keep the background image as `background.<ext>`
    #[arg(short, long, env = "OSZ_CLEANER_BACKGROUND")]
    background: bool,

    /// Render descriptor warnings against the source
    #[arg(long)]
    diagnostics: bool,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a JSON report of the run
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Cli {
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(input) = &self.input {
            config.input.clone_from(input);
        }
        if let Some(output) = &self.output {
            config.output.clone_from(output);
        }
        if let Some(workspace) = &self.workspace {
            config.workspace.clone_from(workspace);
        }
        config.background |= self.background;
        config.diagnostics |= self.diagnostics;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    tracing::info!(
        input = %config.input.display(),
        output = %config.output.display(),
        background = config.background,
        "configured"
    );

    let report = Cleaner::new(config)
        .run()
        .context("cleaning the batch failed")?;

    if let Some(path) = &cli.report {
        report
            .write_json(path)
            .with_context(|| format!("failed to write report {}", path.display()))?;
    }
    Ok(())
}
