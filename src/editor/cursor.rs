use super::EditorBuffer;

/// Cursor position in the editor buffer.
///
/// The column is a character offset and may equal the line length (the
/// insertion point after the last character). Every motion reads line lengths
/// from the buffer it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column (character offset within the line).
    pub col: usize,
}

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Cursor {
    /// Create a cursor at line 0, column 0.
    pub const fn new() -> Self {
        Self { line: 0, col: 0 }
    }

    /// Create a cursor at a specific position.
    pub const fn at(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Move the cursor in the given direction.
    pub fn move_in(&mut self, direction: Direction, buf: &EditorBuffer) {
        match direction {
            Direction::Up => self.move_up(buf),
            Direction::Down => self.move_down(buf),
            Direction::Left => self.move_left(buf),
            Direction::Right => self.move_right(buf),
        }
    }

    pub fn move_up(&mut self, buf: &EditorBuffer) {
        self.line = self.line.saturating_sub(1);
        self.clamp(buf);
    }

    pub fn move_down(&mut self, buf: &EditorBuffer) {
        self.line = (self.line + 1).min(last_line(buf));
        self.clamp(buf);
    }

    /// Move left, wrapping to the end of the previous line at column 0.
    pub fn move_left(&mut self, buf: &EditorBuffer) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.line > 0 {
            self.line -= 1;
            self.col = buf.line_len(self.line);
        }
    }

    /// Move right, wrapping to the start of the next line at end of line.
    pub fn move_right(&mut self, buf: &EditorBuffer) {
        if self.col < buf.line_len(self.line) {
            self.col += 1;
        } else if self.line < last_line(buf) {
            self.line += 1;
            self.col = 0;
        }
    }

    /// Pull the cursor back inside the buffer after a mutation or resize.
    pub fn clamp(&mut self, buf: &EditorBuffer) {
        self.line = self.line.min(last_line(buf));
        self.col = self.col.min(buf.line_len(self.line));
    }

    /// Whether the position is valid for `buf`.
    pub fn is_within(&self, buf: &EditorBuffer) -> bool {
        self.line < buf.line_count() && self.col <= buf.line_len(self.line)
    }
}

const fn last_line(buf: &EditorBuffer) -> usize {
    buf.line_count().saturating_sub(1)
}
