//! Hurst Feature CLI - Main Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use hurst_cli::{init_logging, run, Cli, Settings};
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("failed to load configuration")?;
    cli.apply_overrides(&mut settings);

    init_logging(&settings.logging)?;
    debug!(?settings, "effective configuration");

    let stdout = std::io::stdout();
    run(&cli.command, &settings, stdout.lock())
}
