use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("unknown tone: {0}")]
    UnknownTone(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, Error>;
