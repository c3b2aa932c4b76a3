//! Terminal front end for the tic-tac-toe widget.
//!
//! Renders a [`GameWidget`](tictac_core::GameWidget) with ratatui and feeds
//! mouse clicks and key presses back into it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod terminal;
pub mod theme;
pub mod ui;

pub use app::{App, Control};
pub use cli::Cli;
pub use config::{ConfigError, WidgetConfig};
pub use terminal::TerminalGuard;
pub use theme::Theme;

use anyhow::{Context, Result};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tictac_core::GameWidget;
use tracing::{error, info, instrument};

/// Runs the interactive board until the user quits.
///
/// The terminal is restored on every exit path, including a failed
/// backend setup and a panic inside the event loop.
#[instrument(skip(config), fields(class = ?config.class()))]
pub fn run_tui(config: &WidgetConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let widget = match config.class() {
        Some(class) => GameWidget::with_class(class.as_str()),
        None => GameWidget::new(),
    };
    let mut app = App::new(widget);

    let mut guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")?;

    let res = app::run(&mut terminal, &mut app);
    let restored = guard.restore();

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res.and(restored)
}
