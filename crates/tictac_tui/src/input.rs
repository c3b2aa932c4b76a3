//! Translation of terminal events into widget actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tictac_core::Position;

use crate::ui::{BoardLayout, Target};

/// What an input event asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the keyboard cursor by a row/column delta.
    MoveCursor(isize, isize),
    /// Submit a move at the keyboard cursor.
    SubmitCursor,
    /// Submit a move at a specific cell.
    Submit(Position),
    /// Reset the game.
    Reset,
    /// Leave the application.
    Quit,
}

/// Maps a key press to an action.
///
/// Digits 1-9 address cells in row-major order.
pub fn key_action(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(Action::MoveCursor(-1, 0)),
        KeyCode::Down => Some(Action::MoveCursor(1, 0)),
        KeyCode::Left => Some(Action::MoveCursor(0, -1)),
        KeyCode::Right => Some(Action::MoveCursor(0, 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SubmitCursor),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|digit| (digit as usize).checked_sub(1))
            .and_then(Position::from_index)
            .map(Action::Submit),
        _ => None,
    }
}

/// Maps a mouse event to an action using the last drawn layout.
///
/// Only a left-button press activates anything.
pub fn mouse_action(mouse: MouseEvent, layout: &BoardLayout) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match layout.hit(mouse.column, mouse.row)? {
            Target::Cell(pos) => Some(Action::Submit(pos)),
            Target::Reset => Some(Action::Reset),
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_digits_address_cells() {
        for (digit, pos) in ['1', '5', '9'].into_iter().zip([
            Position::TopLeft,
            Position::Center,
            Position::BottomRight,
        ]) {
            let action = key_action(press(KeyCode::Char(digit)));
            assert_eq!(action, Some(Action::Submit(pos)));
        }
        assert_eq!(key_action(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(key_action(press(KeyCode::Up)), Some(Action::MoveCursor(-1, 0)));
        assert_eq!(key_action(press(KeyCode::Enter)), Some(Action::SubmitCursor));
        assert_eq!(key_action(press(KeyCode::Char('r'))), Some(Action::Reset));
        assert_eq!(key_action(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(key_action(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut key = press(KeyCode::Char('5'));
        key.kind = KeyEventKind::Release;
        assert_eq!(key_action(key), None);
    }

    #[test]
    fn test_left_click_on_cell_and_reset() {
        let layout = BoardLayout::compute(Rect::new(0, 0, 80, 24));
        let center = layout.cell(Position::Center);
        let left = MouseEventKind::Down(MouseButton::Left);

        let on_cell = mouse(left, center.x + 1, center.y + 1);
        assert_eq!(
            mouse_action(on_cell, &layout),
            Some(Action::Submit(Position::Center))
        );
        let on_reset = mouse(left, layout.reset.x, layout.reset.y);
        assert_eq!(mouse_action(on_reset, &layout), Some(Action::Reset));
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let layout = BoardLayout::compute(Rect::new(0, 0, 80, 24));
        let center = layout.cell(Position::Center);
        for kind in [
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Moved,
            MouseEventKind::ScrollDown,
        ] {
            assert_eq!(mouse_action(mouse(kind, center.x, center.y), &layout), None);
        }
        assert_eq!(
            mouse_action(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0), &layout),
            None
        );
    }
}
