use crate::app::model::ExitRequest;
use crate::app::{App, Message, Model, ToastLevel};

impl App {
    /// Run the I/O that follows an exit message accepted by `update`.
    ///
    /// A failed save is logged and kept on the model, and the session ends
    /// anyway.
    pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
        match (msg, model.exit) {
            (Message::SaveAndExit, Some(ExitRequest::Save)) => {
                match model.save_to_disk() {
                    Ok(()) => {
                        tracing::info!(
                            path = %model.file_path.display(),
                            lines = model.buffer.line_count(),
                            "saved document"
                        );
                    }
                    Err(err) => {
                        tracing::error!("{err}");
                        model.show_toast(ToastLevel::Error, err.to_string());
                        model.save_error = Some(err);
                    }
                }
                model.should_quit = true;
            }
            (Message::DiscardAndExit, Some(ExitRequest::Discard)) => {
                tracing::info!(
                    path = %model.file_path.display(),
                    modified = model.modified,
                    "exiting without saving"
                );
                model.should_quit = true;
            }
            _ => {}
        }
    }
}
