use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};

use super::style;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let cursor = model.cursor;
    let mut spans = vec![
        Span::raw("Mode: "),
        Span::styled(model.mode.label(), style::mode_style(model.mode)),
        Span::raw(format!(
            " | Line: {}, Column: {} ",
            cursor.line + 1,
            cursor.col + 1
        )),
    ];
    if model.modified {
        spans.push(Span::styled(
            "(modified)",
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_help_bar(frame: &mut Frame, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let help = Line::from(vec![
        Span::raw("Press "),
        Span::styled("ESC", bold),
        Span::raw(" to switch modes, "),
        Span::styled("Ctrl+S", bold),
        Span::raw(" to save and exit, "),
        Span::styled("Ctrl+Q", bold),
        Span::raw(" to exit without saving."),
    ]);
    frame.render_widget(Paragraph::new(help), area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => {
            ("[error]", Style::default().bg(Color::Red).fg(Color::White))
        }
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
