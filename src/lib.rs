// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. picker::FilePicker)
    clippy::module_name_repetitions
)]

//! # mdpad
//!
//! A terminal editor for a single markdown document.
//!
//! mdpad shows one file inside a bordered frame in one of three modes:
//! - **Edit**: line numbers, a highlighted cursor, character-level editing
//! - **View**: the same text, read only
//! - **Preview**: headings and `- ` list items restyled, read only
//!
//! ## Architecture
//!
//! mdpad uses The Elm Architecture (TEA) pattern:
//! - **Model**: Buffer, cursor, mode and session flags
//! - **Message**: Key presses translated into editor commands
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`editor`]: Line buffer, cursor and mode state machine
//! - [`preview`]: Line classification for preview rendering
//! - [`picker`]: Document discovery and the start-up picker
//! - [`ui`]: Terminal UI components
//! - [`config`]: Persisted command-line defaults

pub mod app;
pub mod config;
pub mod editor;
pub mod error;
pub mod picker;
pub mod preview;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model, update};
    pub use crate::editor::{Cursor, Direction, EditorBuffer, Mode};
    pub use crate::preview::{LineKind, classify};
    pub use crate::ui::viewport::Viewport;
}
