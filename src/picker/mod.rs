//! Document discovery and the start-up file picker.
//!
//! Candidates are the files of a directory plus one level of its
//! subdirectories whose extension matches the configured document extension.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Default document extension (without the dot).
pub const DEFAULT_EXTENSION: &str = "md";

/// A selectable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    /// Display label (`name.md` or `subdir/name.md`)
    pub label: String,
    /// Full path to the file
    pub path: PathBuf,
}

/// List candidate documents under `dir`.
///
/// Entries are sorted by label. Subdirectories that cannot be read are
/// skipped.
///
/// # Errors
///
/// Returns an error if `dir` itself cannot be read.
pub fn discover_documents(dir: &Path, extension: &str) -> Result<Vec<DocumentEntry>> {
    let mut entries = Vec::new();
    let listing =
        std::fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))?;

    for entry in listing.filter_map(std::result::Result::ok) {
        let name = entry.file_name().to_string_lossy().to_string();
        let path = entry.path();
        if path.is_dir() {
            let Ok(sub_listing) = std::fs::read_dir(&path) else {
                tracing::debug!(path = %path.display(), "skipping unreadable directory");
                continue;
            };
            for sub in sub_listing.filter_map(std::result::Result::ok) {
                let sub_name = sub.file_name().to_string_lossy().to_string();
                if has_extension(&sub_name, extension) {
                    entries.push(DocumentEntry {
                        label: format!("{name}/{sub_name}"),
                        path: sub.path(),
                    });
                }
            }
        } else if has_extension(&name, extension) {
            entries.push(DocumentEntry { label: name, path });
        }
    }

    entries.sort_by(|a, b| a.label.cmp(&b.label));
    Ok(entries)
}

/// Whether `name` ends in `.{extension}`.
pub fn has_extension(name: &str, extension: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext == extension)
}

/// What a key press in the picker resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    /// Nothing to do beyond a redraw
    None,
    /// The user chose a document
    Select(PathBuf),
    /// The user backed out
    Cancel,
}

/// Selection state for the start-up picker.
#[derive(Debug, Clone)]
pub struct FilePicker {
    entries: Vec<DocumentEntry>,
    selected: usize,
}

impl FilePicker {
    pub const fn new(entries: Vec<DocumentEntry>) -> Self {
        Self {
            entries,
            selected: 0,
        }
    }

    pub fn entries(&self) -> &[DocumentEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub const fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&DocumentEntry> {
        self.entries.get(self.selected)
    }

    /// Move the highlight up, wrapping to the last entry.
    pub fn select_prev(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = if self.selected == 0 {
            self.entries.len() - 1
        } else {
            self.selected - 1
        };
    }

    /// Move the highlight down, wrapping to the first entry.
    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.entries.len();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PickerAction {
        if key.kind == KeyEventKind::Release {
            return PickerAction::None;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                PickerAction::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                PickerAction::None
            }
            KeyCode::Enter => self
                .selected_entry()
                .map_or(PickerAction::None, |entry| {
                    PickerAction::Select(entry.path.clone())
                }),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                PickerAction::Cancel
            }
            KeyCode::Esc | KeyCode::Char('q') => PickerAction::Cancel,
            _ => PickerAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn entry(label: &str) -> DocumentEntry {
        DocumentEntry {
            label: label.to_string(),
            path: PathBuf::from(label),
        }
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension("notes.md", "md"));
        assert!(!has_extension("notes.markdown", "md"));
        assert!(!has_extension("notes.md.bak", "md"));
        assert!(!has_extension("md", "md"));
        assert!(!has_extension(".md", "md"));
    }

    #[test]
    fn test_discover_top_level_and_one_level_deep() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("README.md"), "# hi").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "skip").unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs").join("guide.md"), "").unwrap();
        std::fs::create_dir_all(dir.path().join("docs").join("deep")).unwrap();
        std::fs::write(dir.path().join("docs").join("deep").join("hidden.md"), "").unwrap();

        let found = discover_documents(dir.path(), "md").unwrap();
        let labels: Vec<_> = found.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["README.md", "docs/guide.md"]);
        assert_eq!(found[1].path, dir.path().join("docs").join("guide.md"));
    }

    #[test]
    fn test_discover_empty_directory() {
        let dir = tempdir().unwrap();
        assert!(discover_documents(dir.path(), "md").unwrap().is_empty());
    }

    #[test]
    fn test_discover_custom_extension() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.md"), "").unwrap();
        std::fs::write(dir.path().join("b.txt"), "").unwrap();
        let found = discover_documents(dir.path(), "txt").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].label, "b.txt");
    }

    #[test]
    fn test_discover_missing_directory_errors() {
        let dir = tempdir().unwrap();
        assert!(discover_documents(&dir.path().join("nope"), "md").is_err());
    }

    #[test]
    fn test_picker_navigation_wraps() {
        let mut picker = FilePicker::new(vec![entry("a.md"), entry("b.md")]);
        assert_eq!(picker.handle_key(key(KeyCode::Up)), PickerAction::None);
        assert_eq!(picker.selected(), 1);
        picker.handle_key(key(KeyCode::Char('j')));
        assert_eq!(picker.selected(), 0);
        picker.handle_key(key(KeyCode::Down));
        assert_eq!(picker.selected(), 1);
    }

    #[test]
    fn test_picker_enter_selects_highlighted() {
        let mut picker = FilePicker::new(vec![entry("a.md"), entry("b.md")]);
        picker.handle_key(key(KeyCode::Down));
        assert_eq!(
            picker.handle_key(key(KeyCode::Enter)),
            PickerAction::Select(PathBuf::from("b.md"))
        );
    }

    #[test]
    fn test_picker_cancel_keys() {
        let mut picker = FilePicker::new(vec![entry("a.md")]);
        assert_eq!(picker.handle_key(key(KeyCode::Esc)), PickerAction::Cancel);
        assert_eq!(picker.handle_key(key(KeyCode::Char('q'))), PickerAction::Cancel);
        assert_eq!(
            picker.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            PickerAction::Cancel
        );
    }

    #[test]
    fn test_empty_picker_ignores_enter() {
        let mut picker = FilePicker::new(Vec::new());
        assert!(picker.is_empty());
        assert_eq!(picker.handle_key(key(KeyCode::Enter)), PickerAction::None);
    }
}
