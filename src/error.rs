//! Crate-level error type and `Result` alias for structured error handling.
//! Converts underlying I/O and JSON errors, and provides semantic variants
//! for plan validation and swapper failures.
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("At least one source face is required")]
    NoSourceFaces,

    #[error("{role} not found: {}", path.display())]
    InputNotFound { role: &'static str, path: PathBuf },

    #[error("Failed to launch swapper `{program}`: {source}")]
    SwapperLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Face swap #{index} failed: swapper exited with {status}")]
    SwapFailed { index: usize, status: ExitStatus },

    #[error("Face swap #{index} produced no output at {}", path.display())]
    MissingSwapOutput { index: usize, path: PathBuf },
}
