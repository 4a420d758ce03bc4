use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::picker::FilePicker;

/// Render the start-up document list.
pub fn render_picker(picker: &FilePicker, frame: &mut Frame) {
    let area = frame.area();
    if picker.is_empty() {
        frame.render_widget(Paragraph::new("No markdown files found."), area);
        return;
    }

    let entries = picker.entries();
    let visible_rows = area.height.saturating_sub(1) as usize;
    let start = picker
        .selected()
        .saturating_sub(visible_rows.saturating_sub(1))
        .min(entries.len().saturating_sub(visible_rows));
    let end = (start + visible_rows).min(entries.len());

    let mut items: Vec<Line> = vec![Line::raw("Select a markdown file:")];
    items.extend(
        entries
            .iter()
            .enumerate()
            .skip(start)
            .take(end.saturating_sub(start))
            .map(|(i, entry)| {
                if picker.selected() == i {
                    Line::styled(
                        format!("❯ {}", entry.label),
                        Style::default().fg(Color::Blue),
                    )
                } else {
                    Line::raw(format!("  {}", entry.label))
                }
            }),
    );

    frame.render_widget(Paragraph::new(items), area);
}
