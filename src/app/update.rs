use crate::app::Model;
use crate::app::model::ExitRequest;
use crate::editor::Direction;

/// All possible events and actions in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Advance Edit -> View -> Preview -> Edit
    CycleMode,

    // Editor
    /// Insert a character at the cursor
    InsertChar(char),
    /// Open an empty line below the cursor line (Enter)
    InsertLineBreak,
    /// Delete character before cursor (Backspace / Delete)
    DeleteBack,
    /// Move cursor in a direction
    MoveCursor(Direction),

    // Session
    /// Write the buffer and quit
    SaveAndExit,
    /// Quit without writing
    DiscardAndExit,

    // Window
    /// Terminal resized
    Resize(u16, u16),
}

impl Message {
    /// Whether the message is only honoured in edit mode.
    pub const fn requires_edit_mode(&self) -> bool {
        match self {
            Self::CycleMode | Self::Resize(..) => false,
            Self::InsertChar(_)
            | Self::InsertLineBreak
            | Self::DeleteBack
            | Self::MoveCursor(_)
            | Self::SaveAndExit
            | Self::DiscardAndExit => true,
        }
    }
}

/// Pure function that updates the model based on a message.
///
/// Outside edit mode every message except mode cycling and resizing is
/// dropped, leaving buffer and cursor untouched.
pub fn update(mut model: Model, msg: Message) -> Model {
    if msg.requires_edit_mode() && !model.mode.is_editable() {
        tracing::trace!(?msg, mode = ?model.mode, "ignored outside edit mode");
        return model;
    }

    match msg {
        Message::CycleMode => {
            model.mode = model.mode.next();
            tracing::debug!(mode = ?model.mode, "mode changed");
        }
        Message::InsertChar(ch) => {
            let cursor = model.cursor;
            if model.buffer.insert_char(cursor.line, cursor.col, ch) {
                model.cursor.col += 1;
                model.modified = true;
            }
        }
        Message::InsertLineBreak => {
            model.buffer.insert_line_after(model.cursor.line);
            model.cursor.line += 1;
            model.cursor.col = 0;
            model.modified = true;
        }
        Message::DeleteBack => {
            let cursor = model.cursor;
            if model.buffer.delete_char_before(cursor.line, cursor.col) {
                model.cursor.col -= 1;
            }
            model.modified = true;
        }
        Message::MoveCursor(direction) => {
            model.cursor.move_in(direction, &model.buffer);
        }
        Message::SaveAndExit => {
            model.exit = Some(ExitRequest::Save);
        }
        Message::DiscardAndExit => {
            model.exit = Some(ExitRequest::Discard);
        }
        Message::Resize(width, height) => {
            model.terminal_size = (width, height);
            model.reflow_layout();
        }
    }
    model.settle_cursor();
    model
}
