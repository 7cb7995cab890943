use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum GridzError {
    #[error("Puzzle not found: {0}")]
    PuzzleNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, GridzError>;
