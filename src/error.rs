use std::path::PathBuf;

use thiserror::Error;

/// File I/O failures surfaced by an editing session.
///
/// Neither variant touches the in-memory buffer: a failed read starts the
/// session on an empty document, a failed write still ends the session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Error reading file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error saving file {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SessionError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Save { path, .. } => path,
        }
    }
}
