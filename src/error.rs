// Error taxonomy shared by storage, state and command handlers
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Login required: {0}")]
    Unauthorized(&'static str),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
