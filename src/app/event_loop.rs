use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, SessionSummary, update};
use crate::picker::{FilePicker, PickerAction};

impl App {
    /// Run an editing session on the configured file.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or event polling fails.
    /// File read and write failures do not end up here; they are reported
    /// through the returned [`SessionSummary`].
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal: mdpad requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::open(&self.file_path, (size.width, size.height))
            .with_frame_size(self.frame_size.0, self.frame_size.1)
            .with_line_numbers(self.line_numbers);

        let result = Self::event_loop(&mut terminal, &mut model);

        ratatui::restore();

        result.map(|()| SessionSummary::from_model(model))
    }

    /// Show the document picker and return the chosen path.
    ///
    /// Returns `Ok(None)` when the user cancels.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or event polling fails.
    pub fn pick_document(picker: &mut FilePicker) -> Result<Option<PathBuf>> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal: mdpad requires an interactive terminal")?;

        let result = Self::picker_loop(&mut terminal, picker);

        ratatui::restore();

        result
    }

    fn picker_loop(terminal: &mut DefaultTerminal, picker: &mut FilePicker) -> Result<Option<PathBuf>> {
        loop {
            terminal.draw(|frame| crate::ui::render_picker(picker, frame))?;
            if let event::Event::Key(key) = event::read()? {
                match picker.handle_key(key) {
                    PickerAction::None => {}
                    PickerAction::Select(path) => return Ok(Some(path)),
                    PickerAction::Cancel => return Ok(None),
                }
            }
        }
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            if needs_render {
                terminal.draw(|frame| Self::view(model, frame))?;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }

            let poll_ms = if model.active_toast().is_some() { 250 } else { 1_000 };
            if event::poll(Duration::from_millis(poll_ms))? {
                // One event is applied in full, side effects included, before the next read.
                if let Some(msg) = Self::handle_event(&event::read()?) {
                    tracing::debug!(?msg, "dispatch");
                    let side_msg = msg.clone();
                    *model = update(std::mem::take(model), msg);
                    Self::handle_message_side_effects(model, &side_msg);
                    needs_render = true;
                }
            }
        }
        Ok(())
    }
}
