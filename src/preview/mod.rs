//! Line classification for the preview mode.
//!
//! Preview rendering is line-by-line: each source line is matched against a
//! small set of prefixes and rendered with the style for its [`LineKind`].
//! Nothing beyond these prefixes is recognised; bold, links, code spans and
//! nested lists all come out as plain text.

/// Semantic category of a source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Heading with level 1-4
    Heading(u8),
    /// `- ` list item
    ListItem,
    /// Anything else
    Plain,
}

/// A classified line: its kind plus the text left after the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub kind: LineKind,
    pub text: &'a str,
}

impl<'a> ClassifiedLine<'a> {
    pub const fn new(kind: LineKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}

/// Prefixes in match order, deepest heading first.
const PREFIXES: [(&str, LineKind); 5] = [
    ("#### ", LineKind::Heading(4)),
    ("### ", LineKind::Heading(3)),
    ("## ", LineKind::Heading(2)),
    ("# ", LineKind::Heading(1)),
    ("- ", LineKind::ListItem),
];

/// Classify a single line. The first matching prefix wins.
pub fn classify(line: &str) -> ClassifiedLine<'_> {
    PREFIXES
        .iter()
        .find_map(|(prefix, kind)| {
            line.strip_prefix(prefix)
                .map(|rest| ClassifiedLine::new(*kind, rest))
        })
        .unwrap_or(ClassifiedLine::new(LineKind::Plain, line))
}
