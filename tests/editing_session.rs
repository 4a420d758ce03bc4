use std::path::PathBuf;

use mdpad::prelude::*;
use mdpad::picker::{FilePicker, PickerAction, discover_documents};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn apply(model: Model, msgs: impl IntoIterator<Item = Message>) -> Model {
    msgs.into_iter().fold(model, update)
}

fn type_text(text: &str) -> Vec<Message> {
    text.chars()
        .map(|c| {
            if c == '\n' {
                Message::InsertLineBreak
            } else {
                Message::InsertChar(c)
            }
        })
        .collect()
}

#[test]
fn test_typing_a_document_from_scratch() {
    let model = Model::new(PathBuf::from("new.md"), EditorBuffer::empty(), (80, 24));
    let model = apply(model, type_text("# Notes\n- one\n- two"));

    assert_eq!(model.buffer.text(), "# Notes\n- one\n- two");
    assert_eq!(model.cursor, Cursor::at(2, 5));
    assert!(model.modified);

    let kinds: Vec<LineKind> = model.buffer.lines().map(|l| classify(l).kind).collect();
    assert_eq!(
        kinds,
        vec![LineKind::Heading(1), LineKind::ListItem, LineKind::ListItem]
    );
}

#[test]
fn test_typing_is_ignored_while_previewing() {
    let model = Model::new(PathBuf::from("doc.md"), EditorBuffer::from_text("text"), (80, 24));
    let model = apply(
        model,
        [Message::CycleMode, Message::CycleMode]
            .into_iter()
            .chain(type_text("ignored")),
    );
    assert_eq!(model.mode, Mode::Preview);
    assert_eq!(model.buffer.text(), "text");
    assert!(!model.modified);

    let model = apply(model, [Message::CycleMode, Message::InsertChar('!')]);
    assert_eq!(model.mode, Mode::Edit);
    assert_eq!(model.buffer.text(), "!text");
}

#[test]
fn test_save_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.md");
    let original = "first\r\nsecond\n\nlast\n";
    std::fs::write(&path, original).unwrap();

    let model = Model::open(&path, (80, 24));
    assert_eq!(model.buffer.line_count(), 5);
    model.save_to_disk().unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_picker_selects_discovered_document() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.md"), "").unwrap();
    std::fs::write(dir.path().join("a.md"), "").unwrap();
    std::fs::write(dir.path().join("skip.txt"), "").unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    std::fs::write(dir.path().join("sub").join("c.md"), "").unwrap();

    let docs = discover_documents(dir.path(), "md").unwrap();
    let labels: Vec<&str> = docs.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, vec!["a.md", "b.md", "sub/c.md"]);

    let mut picker = FilePicker::new(docs);
    assert_eq!(
        picker.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)),
        PickerAction::None
    );
    assert_eq!(
        picker.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
        PickerAction::Select(dir.path().join("b.md"))
    );
}
