use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;
use crate::editor::Mode;
use crate::preview::classify;

use super::{FOOTER_ROWS, GUTTER_WIDTH, frame_block, frame_rect, status, style};

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let frame_area = frame_rect(area, model.frame_size);

    let filename = model.file_path.file_name().map_or_else(
        || "untitled".to_string(),
        |s| s.to_string_lossy().to_string(),
    );
    let block = frame_block().title(format!(" {filename} "));
    let doc_area = block.inner(frame_area);
    frame.render_widget(block, frame_area);

    let content = match model.mode {
        Mode::Edit => edit_lines(model),
        Mode::View => view_lines(model),
        Mode::Preview => preview_lines(model),
    };
    frame.render_widget(Paragraph::new(content), doc_area);

    if area.height < frame_area.height + FOOTER_ROWS {
        return;
    }
    let status_area = Rect {
        y: frame_area.bottom(),
        height: 1,
        ..area
    };
    let help_area = Rect {
        y: frame_area.bottom() + 1,
        height: 1,
        ..area
    };
    status::render_status_bar(model, frame, status_area);
    if model.active_toast().is_some() {
        status::render_toast_bar(model, frame, help_area);
    } else {
        status::render_help_bar(frame, help_area);
    }
}

fn gutter(model: &Model, line_idx: usize) -> Option<Span<'static>> {
    model.line_numbers.then(|| {
        Span::styled(
            format!("{:<width$}", line_idx + 1, width = GUTTER_WIDTH as usize),
            style::gutter_style(),
        )
    })
}

fn edit_lines(model: &Model) -> Vec<Line<'static>> {
    let cursor = model.cursor;
    model
        .viewport
        .visible_range()
        .map(|line_idx| {
            let text = model.buffer.line_at(line_idx).unwrap_or_default();
            let mut spans: Vec<Span> = gutter(model, line_idx).into_iter().collect();

            if line_idx == cursor.line {
                let (before, at, after) = split_at_cursor(text, cursor.col);
                if !before.is_empty() {
                    spans.push(Span::raw(before.to_string()));
                }
                spans.push(Span::styled(at.to_string(), style::cursor_style()));
                if !after.is_empty() {
                    spans.push(Span::raw(after.to_string()));
                }
            } else {
                spans.push(Span::raw(text.to_string()));
            }
            Line::from(spans)
        })
        .collect()
}

fn view_lines(model: &Model) -> Vec<Line<'static>> {
    model
        .viewport
        .visible_range()
        .map(|line_idx| {
            let text = model.buffer.line_at(line_idx).unwrap_or_default();
            let mut spans: Vec<Span> = gutter(model, line_idx).into_iter().collect();
            spans.push(Span::raw(text.to_string()));
            Line::from(spans)
        })
        .collect()
}

fn preview_lines(model: &Model) -> Vec<Line<'static>> {
    model
        .viewport
        .visible_range()
        .map(|line_idx| {
            let classified = classify(model.buffer.line_at(line_idx).unwrap_or_default());
            let mut spans: Vec<Span> = gutter(model, line_idx).into_iter().collect();
            let indent = style::indent_for_line_kind(classified.kind);
            if indent > 0 {
                spans.push(Span::raw(" ".repeat(indent)));
            }
            let text = if classified.kind == crate::preview::LineKind::ListItem {
                format!("{}{}", style::BULLET, classified.text)
            } else {
                classified.text.to_string()
            };
            spans.push(Span::styled(text, style::style_for_line_kind(classified.kind)));
            Line::from(spans)
        })
        .collect()
}

/// Split `text` into the part before the cursor, the cursor cell, and the rest.
///
/// At end of line the cursor cell is a blank.
fn split_at_cursor(text: &str, col: usize) -> (&str, &str, &str) {
    let mut boundaries = text.char_indices().map(|(i, _)| i).skip(col);
    let Some(start) = boundaries.next() else {
        return (text, " ", "");
    };
    let end = boundaries.next().unwrap_or(text.len());
    (&text[..start], &text[start..end], &text[end..])
}
