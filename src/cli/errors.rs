use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Both --faces and --target arguments are required")]
    MissingFacesOrTarget,

    #[error("At least one source face is required")]
    NoSourceFaces,

    #[error("Target image path is required after --target")]
    MissingTargetPath,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Swap(#[from] multiswap::Error),
}
