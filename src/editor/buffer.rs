/// The document text as an ordered sequence of lines.
///
/// Lines are split on `'\n'` only, so `from_text` followed by `text` gives back
/// the original string byte for byte. A buffer always holds at least one line;
/// the empty document is a single empty line.
///
/// Columns are character offsets, not byte offsets. Mutations that receive a
/// position outside the buffer do nothing: the caller is expected to hand in a
/// clamped cursor.
#[derive(Clone, PartialEq, Eq)]
pub struct EditorBuffer {
    lines: Vec<String>,
}

impl EditorBuffer {
    /// Create a new buffer from a string.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(ToOwned::to_owned).collect(),
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// Total number of lines in the buffer. Never zero.
    pub const fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get the content of a line.
    pub fn line_at(&self, line_idx: usize) -> Option<&str> {
        self.lines.get(line_idx).map(String::as_str)
    }

    /// Length of a line in characters, or 0 for a missing line.
    pub fn line_len(&self, line_idx: usize) -> usize {
        self.line_at(line_idx).map_or(0, |s| s.chars().count())
    }

    /// Iterate over all lines in document order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// The full text content of the buffer, lines joined with `'\n'`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Insert an empty line directly after `line_idx`.
    pub fn insert_line_after(&mut self, line_idx: usize) {
        if line_idx >= self.lines.len() {
            return;
        }
        self.lines.insert(line_idx + 1, String::new());
    }

    /// Delete the character before `col` on `line_idx` (Backspace).
    ///
    /// At column 0 nothing happens: lines are never joined.
    /// Returns `true` if a character was deleted.
    pub fn delete_char_before(&mut self, line_idx: usize, col: usize) -> bool {
        if col == 0 {
            return false;
        }
        let Some(line) = self.lines.get_mut(line_idx) else {
            return false;
        };
        let Some(start) = byte_offset(line, col - 1) else {
            return false;
        };
        line.remove(start);
        true
    }

    /// Insert `ch` at character offset `col` on `line_idx`.
    ///
    /// A `'\n'` is rejected; new lines only come from [`Self::insert_line_after`].
    /// Returns `true` if the character was inserted.
    pub fn insert_char(&mut self, line_idx: usize, col: usize, ch: char) -> bool {
        if ch == '\n' {
            return false;
        }
        let Some(line) = self.lines.get_mut(line_idx) else {
            return false;
        };
        let Some(at) = byte_offset(line, col) else {
            return false;
        };
        line.insert(at, ch);
        true
    }
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field("lines", &format_args!("{} lines", self.lines.len()))
            .finish()
    }
}

/// Byte offset of character `col` in `line`; `col == char count` maps to the end.
fn byte_offset(line: &str, col: usize) -> Option<usize> {
    line.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()))
        .nth(col)
}
