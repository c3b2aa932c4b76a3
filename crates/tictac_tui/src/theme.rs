//! Colour themes selected by the widget's style class.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use tictac_core::Mark;
use tracing::{instrument, warn};

/// A named colour scheme.
///
/// Themes only change how the board looks; they never affect play.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    /// Blue X, red O on the terminal background.
    #[default]
    Classic,
    /// No colour, marks distinguished by weight only.
    Mono,
    /// Bright marks and a yellow win highlight.
    Contrast,
}

impl Theme {
    /// Resolves a style class to a theme.
    ///
    /// Unknown classes fall back to [`Theme::Classic`].
    #[instrument]
    pub fn from_class(class: Option<&str>) -> Self {
        let Some(class) = class else {
            return Self::default();
        };
        Self::from_str(class.trim()).unwrap_or_else(|_| {
            warn!(class, "Unknown style class, using classic theme");
            Self::default()
        })
    }

    /// Style for a mark.
    pub fn mark(self, mark: Mark) -> Style {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        match (self, mark) {
            (Theme::Classic, Mark::X) => bold.fg(Color::Blue),
            (Theme::Classic, Mark::O) => bold.fg(Color::Red),
            (Theme::Mono, Mark::X) => bold,
            (Theme::Mono, Mark::O) => Style::default(),
            (Theme::Contrast, Mark::X) => bold.fg(Color::LightCyan),
            (Theme::Contrast, Mark::O) => bold.fg(Color::LightMagenta),
        }
    }

    /// Style for the key hint shown in empty cells.
    pub fn empty(self) -> Style {
        match self {
            Theme::Mono => Style::default().add_modifier(Modifier::DIM),
            _ => Style::default().fg(Color::DarkGray),
        }
    }

    /// Style for the keyboard cursor cell.
    pub fn cursor(self) -> Style {
        match self {
            Theme::Contrast => Style::default().bg(Color::White).fg(Color::Black),
            _ => Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    /// Background for cells of the winning line.
    pub fn highlight(self) -> Style {
        match self {
            Theme::Classic => Style::default().bg(Color::Green),
            Theme::Mono => Style::default().add_modifier(Modifier::UNDERLINED),
            Theme::Contrast => Style::default().bg(Color::Yellow),
        }
    }

    /// Style for grid rules.
    pub fn rule(self) -> Style {
        match self {
            Theme::Contrast => Style::default().fg(Color::White),
            _ => Style::default().fg(Color::DarkGray),
        }
    }

    /// Style for the title line.
    pub fn title(self) -> Style {
        match self {
            Theme::Mono => Style::default().add_modifier(Modifier::BOLD),
            _ => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        }
    }

    /// Style for the status line.
    pub fn status(self) -> Style {
        match self {
            Theme::Mono => Style::default(),
            _ => Style::default().fg(Color::Yellow),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_absent_class_is_classic() {
        assert_eq!(Theme::from_class(None), Theme::Classic);
    }

    #[test]
    fn test_class_names_are_case_insensitive() {
        assert_eq!(Theme::from_class(Some("MONO")), Theme::Mono);
        assert_eq!(Theme::from_class(Some(" contrast ")), Theme::Contrast);
    }

    #[test]
    fn test_unknown_class_falls_back() {
        assert_eq!(Theme::from_class(Some("neon")), Theme::Classic);
    }

    #[test]
    fn test_display_roundtrips_through_from_class() {
        for theme in Theme::iter() {
            assert_eq!(Theme::from_class(Some(&theme.to_string())), theme);
        }
    }

    #[test]
    fn test_marks_are_distinguishable() {
        for theme in Theme::iter() {
            assert_ne!(theme.mark(Mark::X), theme.mark(Mark::O));
        }
    }
}
