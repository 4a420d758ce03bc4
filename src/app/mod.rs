//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete session state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{ExitRequest, Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::error::SessionError;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: PathBuf,
    frame_size: (u16, u16),
    line_numbers: bool,
}

impl App {
    /// Create a new application for the given file.
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            frame_size: (crate::ui::DEFAULT_FRAME_WIDTH, crate::ui::DEFAULT_FRAME_HEIGHT),
            line_numbers: true,
        }
    }

    /// Set the document frame size (clamped to the terminal at render time).
    pub const fn with_frame_size(mut self, width: u16, height: u16) -> Self {
        self.frame_size = (width, height);
        self
    }

    /// Show or hide the line-number gutter.
    pub const fn with_line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }
}

/// What happened in a finished session.
#[derive(Debug)]
pub struct SessionSummary {
    pub file_path: PathBuf,
    pub exit: Option<ExitRequest>,
    pub modified: bool,
    pub save_error: Option<SessionError>,
}

impl SessionSummary {
    fn from_model(model: Model) -> Self {
        Self {
            file_path: model.file_path,
            exit: model.exit,
            modified: model.modified,
            save_error: model.save_error,
        }
    }
}
