//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Visible line range of the document frame
//! - [`style`]: Colors for the gutter, cursor and preview lines

pub mod style;
pub mod viewport;

mod picker;
mod render;
mod status;

use ratatui::layout::Rect;
use ratatui::widgets::{Block, BorderType, Padding};

pub use picker::render_picker;
pub use render::render;

pub const DEFAULT_FRAME_WIDTH: u16 = 80;
pub const DEFAULT_FRAME_HEIGHT: u16 = 20;
pub const GUTTER_WIDTH: u16 = 4;
/// Status line and help line below the document frame.
pub const FOOTER_ROWS: u16 = 2;

/// The bordered box around the document.
pub fn frame_block<'a>() -> Block<'a> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .padding(Padding::uniform(1))
}

/// Where the document frame goes: top-left, no larger than the terminal
/// minus the footer rows.
pub fn frame_rect(area: Rect, frame_size: (u16, u16)) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: frame_size.0.min(area.width),
        height: frame_size.1.min(area.height.saturating_sub(FOOTER_ROWS)),
    }
}

/// Columns and rows left for line text inside the frame.
pub fn content_size(terminal_size: (u16, u16), frame_size: (u16, u16), line_numbers: bool) -> (u16, u16) {
    let area = Rect::new(0, 0, terminal_size.0, terminal_size.1);
    let inner = frame_block().inner(frame_rect(area, frame_size));
    let gutter = if line_numbers { GUTTER_WIDTH } else { 0 };
    (inner.width.saturating_sub(gutter), inner.height)
}
