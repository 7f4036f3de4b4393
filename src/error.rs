use thiserror::Error;

#[derive(Debug, Error)]
pub enum WingError {
    #[error("Unknown flavor: {0}")]
    UnknownFlavor(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, WingError>;
