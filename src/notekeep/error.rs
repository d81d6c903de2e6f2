use crate::record::RecordError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotekeepError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A 1-based display index outside `1..=count`.
    #[error("Invalid index: {index} (there are {count} notes)")]
    InvalidIndex { index: usize, count: usize },

    #[error("Cannot save note: {0}")]
    Record(#[from] RecordError),

    #[error("Not a valid number: {0}")]
    InvalidNumber(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NotekeepError>;
