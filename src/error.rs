use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcoError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("guess out of range (expected 0-100): {0}")]
    GuessOutOfRange(String),

    #[error("action unavailable: {0}")]
    ActionUnavailable(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EcoError>;
