use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::editor::{Cursor, EditorBuffer, Mode};
use crate::error::SessionError;
use crate::ui::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// How the user asked to leave the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitRequest {
    /// Write the buffer to disk, then exit
    Save,
    /// Exit without writing
    Discard,
}

/// The complete session state.
///
/// Buffer, cursor, mode and the modified flag live side by side so that every
/// message updates them together in one step.
pub struct Model {
    /// The document text
    pub buffer: EditorBuffer,
    /// Current edit position, always inside `buffer`
    pub cursor: Cursor,
    /// Active editor mode
    pub mode: Mode,
    /// Set by any content mutation; never cleared during a session
    pub modified: bool,
    /// Path to the source file
    pub file_path: PathBuf,
    /// Lines visible inside the document frame
    pub viewport: Viewport,
    /// Requested document frame size (columns, rows) before terminal clamping
    pub frame_size: (u16, u16),
    /// Last known terminal size
    pub terminal_size: (u16, u16),
    /// Whether the line-number gutter is drawn
    pub line_numbers: bool,
    /// Pending exit command, set only from edit mode
    pub exit: Option<ExitRequest>,
    /// Failure from the save-and-exit path, reported once the terminal is restored
    pub save_error: Option<SessionError>,
    /// Whether the app should quit
    pub should_quit: bool,
    toast: Option<Toast>,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("file_path", &self.file_path)
            .field("buffer", &self.buffer)
            .field("cursor", &self.cursor)
            .field("mode", &self.mode)
            .field("modified", &self.modified)
            .field("exit", &self.exit)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a new model for an already loaded buffer.
    pub fn new(file_path: PathBuf, buffer: EditorBuffer, terminal_size: (u16, u16)) -> Self {
        let frame_size = (
            crate::ui::DEFAULT_FRAME_WIDTH,
            crate::ui::DEFAULT_FRAME_HEIGHT,
        );
        let (width, height) = crate::ui::content_size(terminal_size, frame_size, true);
        let total_lines = buffer.line_count();

        Self {
            buffer,
            cursor: Cursor::new(),
            mode: Mode::Edit,
            modified: false,
            file_path,
            viewport: Viewport::new(width, height, total_lines),
            frame_size,
            terminal_size,
            line_numbers: true,
            exit: None,
            save_error: None,
            should_quit: false,
            toast: None,
        }
    }

    /// Read `path` and start a session on it.
    ///
    /// Invalid UTF-8 is decoded lossily and flagged with a warning toast.
    /// A read failure is logged and shown as a toast; the session then starts
    /// on an empty buffer.
    pub fn open(path: &Path, terminal_size: (u16, u16)) -> Self {
        match read_document(path) {
            Ok((buffer, lossy)) => {
                tracing::info!(
                    path = %path.display(),
                    lines = buffer.line_count(),
                    lossy,
                    "opened document"
                );
                let mut model = Self::new(path.to_path_buf(), buffer, terminal_size);
                if lossy {
                    tracing::warn!(path = %path.display(), "document is not valid UTF-8");
                    model.show_toast(
                        ToastLevel::Warning,
                        "File is not valid UTF-8; invalid bytes are shown as \u{fffd}",
                    );
                }
                model
            }
            Err(err) => {
                tracing::error!("{err}");
                let mut model = Self::new(path.to_path_buf(), EditorBuffer::empty(), terminal_size);
                model.show_toast(ToastLevel::Error, err.to_string());
                model
            }
        }
    }

    /// Override the document frame size.
    #[must_use]
    pub fn with_frame_size(mut self, width: u16, height: u16) -> Self {
        self.frame_size = (width, height);
        self.reflow_layout();
        self
    }

    /// Show or hide the line-number gutter.
    #[must_use]
    pub fn with_line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self.reflow_layout();
        self
    }

    /// Write the buffer to `file_path`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Save`] if the file cannot be written.
    pub fn save_to_disk(&self) -> Result<(), SessionError> {
        std::fs::write(&self.file_path, self.buffer.text()).map_err(|source| SessionError::Save {
            path: self.file_path.clone(),
            source,
        })
    }

    /// Recompute the viewport from the terminal and frame sizes.
    pub(super) fn reflow_layout(&mut self) {
        let (width, height) =
            crate::ui::content_size(self.terminal_size, self.frame_size, self.line_numbers);
        self.viewport.resize(width, height);
        self.viewport.set_total_lines(self.buffer.line_count());
        self.viewport.scroll_to_include(self.cursor.line);
    }

    /// Re-establish the cursor invariant and keep the cursor line on screen.
    pub(super) fn settle_cursor(&mut self) {
        self.cursor.clamp(&self.buffer);
        self.viewport.set_total_lines(self.buffer.line_count());
        self.viewport.scroll_to_include(self.cursor.line);
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

/// Read `path` into a buffer. The flag is set when bytes had to be replaced.
fn read_document(path: &Path) -> Result<(EditorBuffer, bool), SessionError> {
    let bytes = std::fs::read(path).map_err(|source| SessionError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let lossy = matches!(text, Cow::Owned(_));
    Ok((EditorBuffer::from_text(&text), lossy))
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self::new(PathBuf::new(), EditorBuffer::empty(), (80, 24))
    }
}
