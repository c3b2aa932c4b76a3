//! Application state and event loop.

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{Frame, Terminal, backend::Backend};
use tictac_core::{GameWidget, Position, Submission};
use tracing::{debug, info, instrument};

use crate::input::{Action, key_action, mouse_action};
use crate::theme::Theme;
use crate::ui::{self, BoardLayout};

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep handling events.
    Continue,
    /// Leave the loop.
    Quit,
}

/// Main application state.
///
/// Owns the game widget plus presentation-only state: the keyboard cursor,
/// the theme and the layout of the last drawn frame.
#[derive(Debug)]
pub struct App {
    widget: GameWidget,
    cursor: Position,
    theme: Theme,
    layout: BoardLayout,
}

impl App {
    /// Creates an application around a fresh widget.
    #[instrument(skip(widget))]
    pub fn new(widget: GameWidget) -> Self {
        let theme = Theme::from_class(widget.class());
        Self {
            widget,
            cursor: Position::Center,
            theme,
            layout: BoardLayout::default(),
        }
    }

    /// Gets the game widget.
    pub fn widget(&self) -> &GameWidget {
        &self.widget
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Renders the current state and remembers the layout for hit-testing.
    pub fn draw(&mut self, frame: &mut Frame) {
        self.layout = ui::draw(frame, &self.widget, self.cursor, self.theme);
    }

    /// Handles one terminal event.
    pub fn handle_event(&mut self, event: Event) -> Control {
        let action = match event {
            Event::Key(key) => key_action(key),
            Event::Mouse(mouse) => mouse_action(mouse, &self.layout),
            _ => None,
        };
        match action {
            Some(action) => self.apply(action),
            None => Control::Continue,
        }
    }

    /// Applies an action to the widget or the cursor.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) -> Control {
        match action {
            Action::MoveCursor(d_row, d_col) => {
                self.cursor = self.cursor.step(d_row, d_col);
            }
            Action::SubmitCursor => self.submit(self.cursor),
            Action::Submit(pos) => {
                self.cursor = pos;
                self.submit(pos);
            }
            Action::Reset => self.widget.reset(),
            Action::Quit => {
                info!("User quit");
                return Control::Quit;
            }
        }
        Control::Continue
    }

    fn submit(&mut self, pos: Position) {
        if let Submission::Ignored(reason) = self.widget.submit_at(pos) {
            debug!(%reason, "Click had no effect");
        }
    }
}

/// Draws and handles events until the user quits.
#[instrument(skip_all)]
pub fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    info!(theme = %app.theme(), "Starting event loop");
    loop {
        terminal.draw(|frame| app.draw(frame))?;
        if app.handle_event(event::read()?) == Control::Quit {
            return Ok(());
        }
    }
}
