//! Command-line interface for the tic-tac-toe board.

use clap::Parser;
use std::path::PathBuf;

/// Interactive tic-tac-toe board in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Play tic-tac-toe with mouse or keyboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Style class (classic, mono, contrast); overrides the config file
    #[arg(long)]
    pub class: Option<String>,

    /// Log file path; overrides the config file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
