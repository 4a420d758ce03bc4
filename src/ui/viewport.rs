//! Viewport management for the document frame.
//!
//! The [`Viewport`] tracks which buffer lines fit inside the bordered
//! document frame and scrolls so the cursor line stays on screen.

use std::ops::Range;

/// Manages the visible portion of the buffer.
///
/// # Example
///
/// ```
/// use mdpad::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(76, 16, 100);
/// assert_eq!(vp.visible_range(), 0..16);
///
/// vp.scroll_to_include(20);
/// assert_eq!(vp.visible_range(), 5..21);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    total_lines: usize,
}

impl Viewport {
    /// Create a new viewport.
    ///
    /// # Arguments
    ///
    /// * `width` - Columns available for line content
    /// * `height` - Rows available for line content
    /// * `total_lines` - Total lines in the buffer
    pub const fn new(width: u16, height: u16, total_lines: usize) -> Self {
        Self {
            width,
            height,
            offset: 0,
            total_lines,
        }
    }

    /// Get the current scroll offset.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Get the range of visible lines, clamped to the buffer.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset;
        let end = (self.offset + self.height as usize).min(self.total_lines);
        start..end
    }

    /// Scroll the minimum amount needed for `line` to be visible.
    pub fn scroll_to_include(&mut self, line: usize) {
        let height = self.height as usize;
        if height == 0 {
            self.offset = line.min(self.max_offset());
            return;
        }
        if line < self.offset {
            self.offset = line;
        } else if line >= self.offset + height {
            self.offset = line + 1 - height;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// Resize the viewport.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the total number of lines (e.g., after an edit).
    pub fn set_total_lines(&mut self, total: usize) {
        self.total_lines = total;
        self.offset = self.offset.min(self.max_offset());
    }

    const fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_viewport_starts_at_top() {
        let vp = Viewport::new(76, 16, 100);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_visible_range_short_buffer() {
        let vp = Viewport::new(76, 16, 3);
        assert_eq!(vp.visible_range(), 0..3);
    }

    #[test]
    fn test_scroll_to_include_below() {
        let mut vp = Viewport::new(76, 10, 50);
        vp.scroll_to_include(10);
        assert_eq!(vp.offset(), 1);
    }

    #[test]
    fn test_scroll_to_include_above() {
        let mut vp = Viewport::new(76, 10, 50);
        vp.scroll_to_include(30);
        vp.scroll_to_include(5);
        assert_eq!(vp.offset(), 5);
    }

    #[test]
    fn test_scroll_to_include_visible_line_is_noop() {
        let mut vp = Viewport::new(76, 10, 50);
        vp.scroll_to_include(9);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_resize_keeps_valid_offset() {
        let mut vp = Viewport::new(76, 10, 40);
        vp.scroll_to_include(39);
        vp.resize(76, 30);
        assert_eq!(vp.offset(), 10);
    }

    #[test]
    fn test_set_total_lines_adjusts_offset() {
        let mut vp = Viewport::new(76, 10, 100);
        vp.scroll_to_include(99);
        vp.set_total_lines(20);
        assert_eq!(vp.offset(), 10);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn included_line_is_visible(
                total_lines in 1..10000usize,
                height in 1..100u16,
                target in 0..10000usize,
            ) {
                let mut vp = Viewport::new(80, height, total_lines);
                let line = target % total_lines;
                vp.scroll_to_include(line);
                prop_assert!(vp.visible_range().contains(&line));
            }

            #[test]
            fn visible_range_within_bounds(
                total_lines in 0..10000usize,
                height in 1..100u16,
                target in 0..10000usize,
            ) {
                let mut vp = Viewport::new(80, height, total_lines);
                vp.scroll_to_include(target);

                let range = vp.visible_range();
                prop_assert!(range.start <= range.end);
                prop_assert!(range.end <= total_lines);
            }
        }
    }
}
