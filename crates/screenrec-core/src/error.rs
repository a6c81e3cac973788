//! Error types for screenrec-core.

use std::io;
use std::path::PathBuf;

/// Errors raised by the core's own collaborators (library, settings).
///
/// Recorder and playback failures are owned by the host and never reach the
/// session reducer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("media library at {} is not readable: {source}", path.display())]
    Library {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings: {0}")]
    Settings(String),

    #[error("unknown platform: {0}. Available: android, ios, other")]
    UnknownPlatform(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
