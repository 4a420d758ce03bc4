//! Theming and color definitions.
//!
//! Uses ANSI colors that adapt to the terminal's color palette.

use ratatui::style::{Color, Modifier, Style};

use crate::editor::Mode;
use crate::preview::LineKind;

/// Prefix drawn in place of the `- ` list marker.
pub const BULLET: &str = "  • ";

/// Get the style for a preview line kind.
pub fn style_for_line_kind(kind: LineKind) -> Style {
    match kind {
        LineKind::Heading(1) => Style::default()
            .fg(Color::Blue)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD),
        LineKind::Heading(2) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        LineKind::Heading(3) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LineKind::Heading(_) => Style::default().fg(Color::Yellow),
        LineKind::ListItem | LineKind::Plain => Style::default(),
    }
}

/// Left indent (in columns) for a preview line kind.
pub const fn indent_for_line_kind(kind: LineKind) -> usize {
    match kind {
        LineKind::Heading(2) => 1,
        LineKind::Heading(3) => 2,
        LineKind::Heading(4) => 4,
        LineKind::Heading(_) | LineKind::ListItem | LineKind::Plain => 0,
    }
}

pub fn gutter_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM)
}

pub fn cursor_style() -> Style {
    Style::default().bg(Color::White).fg(Color::Black)
}

/// Style for the mode name in the status line.
pub fn mode_style(mode: Mode) -> Style {
    let color = match mode {
        Mode::Edit => Color::Green,
        Mode::View => Color::Cyan,
        Mode::Preview => Color::Magenta,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
