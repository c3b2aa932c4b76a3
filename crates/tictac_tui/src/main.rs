//! tictac - interactive tic-tac-toe board in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tictac_tui::{Cli, WidgetConfig, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = WidgetConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.class, cli.log_file);

    init_logging(config.log_file())?;
    info!(?config, "Configuration resolved");

    run_tui(&config)
}

/// Sends logs to a file so they never draw over the terminal UI.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
