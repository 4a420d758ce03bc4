//! In-memory editing core.
//!
//! Provides a line-based text buffer, a cursor clamped against it, and the
//! three-way editor mode, designed for integration into the TEA architecture.

mod buffer;
mod cursor;
mod mode;

pub use buffer::EditorBuffer;
pub use cursor::{Cursor, Direction};
pub use mode::Mode;
