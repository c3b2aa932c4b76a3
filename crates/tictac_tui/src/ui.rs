//! Stateless rendering of the game widget.
//!
//! Drawing never mutates the widget. The layout produced for a frame is
//! returned so pointer events can be hit-tested against the same geometry.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tictac_core::{Cell, GameWidget, Position};

use crate::theme::Theme;

/// Width of one cell in columns.
pub const CELL_WIDTH: u16 = 9;
/// Height of one cell in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Width of the grid including the two vertical rules.
pub const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the grid including the two horizontal rules.
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const RESET_LABEL: &str = "[ Reset Game ]";
const HELP: &str = "Click a cell or use arrows + Enter, 1-9 to play · r reset · q quit";

/// Something the pointer can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// One of the nine cells.
    Cell(Position),
    /// The reset control.
    Reset,
}

/// Screen geometry of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardLayout {
    /// Title line.
    pub title: Rect,
    /// The grid including rules.
    pub grid: Rect,
    /// Cells in row-major order.
    pub cells: [Rect; 9],
    /// Bordered status line.
    pub status: Rect,
    /// Reset control.
    pub reset: Rect,
    /// Key help line.
    pub help: Rect,
}

impl BoardLayout {
    /// Splits `area` into title, grid, status, reset control and help.
    pub fn compute(area: Rect) -> Self {
        let [title, board, status, reset_row, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(GRID_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let grid = center_rect(board, GRID_WIDTH, GRID_HEIGHT);
        let mut cells = [Rect::default(); 9];
        for pos in Position::ALL {
            let x = grid.x + pos.col() as u16 * (CELL_WIDTH + 1);
            let y = grid.y + pos.row() as u16 * (CELL_HEIGHT + 1);
            cells[pos.to_index()] = Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(grid);
        }

        let reset = center_rect(reset_row, RESET_LABEL.chars().count() as u16, 1);

        Self {
            title,
            grid,
            cells,
            status,
            reset,
            help,
        }
    }

    /// Rectangle of one cell.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// Maps a terminal coordinate to the control under it.
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        if contains(self.reset, column, row) {
            return Some(Target::Reset);
        }
        Position::ALL
            .into_iter()
            .find(|pos| contains(self.cell(*pos), column, row))
            .map(Target::Cell)
    }
}

/// Renders the widget and returns the layout it used.
pub fn draw(
    frame: &mut Frame,
    widget: &GameWidget,
    cursor: Position,
    theme: Theme,
) -> BoardLayout {
    let layout = BoardLayout::compute(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(theme.title())
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    draw_rules(frame, &layout, theme);

    let winning = widget.winning_line();
    let finished = widget.status().is_terminal();
    for pos in Position::ALL {
        let (symbol, mut style) = cell_face(widget.board().get(pos), pos, theme, finished);
        if winning.is_some_and(|line| line.contains(&pos)) {
            style = style.patch(theme.highlight());
        }
        if !finished && pos == cursor {
            style = style.patch(theme.cursor());
        }
        draw_cell(frame, layout.cell(pos), symbol, style);
    }

    let status = Paragraph::new(widget.status_line())
        .style(theme.status())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    let reset = Paragraph::new(RESET_LABEL).style(theme.title());
    frame.render_widget(reset, layout.reset);

    let help = Paragraph::new(HELP)
        .style(theme.empty())
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);

    layout
}

/// Symbol and base style of one cell.
///
/// Empty cells show their keypad number only while they can still be
/// played; once the game is over they render blank.
fn cell_face(cell: Cell, pos: Position, theme: Theme, finished: bool) -> (String, Style) {
    match cell {
        Cell::Marked(mark) => (mark.to_string(), theme.mark(mark)),
        Cell::Empty if finished => (String::new(), theme.rule()),
        Cell::Empty => ((pos.to_index() + 1).to_string(), theme.empty()),
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, symbol: String, style: Style) {
    // Pad so the symbol sits on the middle row.
    let mut lines = vec![Line::default(); (area.height.saturating_sub(1) / 2) as usize];
    lines.push(Line::from(symbol));
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_rules(frame: &mut Frame, layout: &BoardLayout, theme: Theme) {
    let grid = layout.grid;
    let segment = "─".repeat(CELL_WIDTH as usize);
    let horizontal = [segment.as_str(); 3].join("┼");

    for row in 1..3u16 {
        let y = grid.y + row * (CELL_HEIGHT + 1) - 1;
        let area = Rect::new(grid.x, y, GRID_WIDTH, 1).intersection(grid);
        frame.render_widget(Paragraph::new(horizontal.as_str()).style(theme.rule()), area);
    }

    for col in 1..3u16 {
        let x = grid.x + col * (CELL_WIDTH + 1) - 1;
        for row in 0..3u16 {
            let y = grid.y + row * (CELL_HEIGHT + 1);
            let area = Rect::new(x, y, 1, CELL_HEIGHT).intersection(grid);
            let bar = vec![Line::from("│"); CELL_HEIGHT as usize];
            frame.render_widget(Paragraph::new(bar).style(theme.rule()), area);
        }
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
