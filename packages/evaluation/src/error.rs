// ABOUTME: Error types for the evaluation package
// ABOUTME: Defines error variants for input validation and serialization failures

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, EvaluationError>;
