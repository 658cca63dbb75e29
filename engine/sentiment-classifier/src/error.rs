//! Error types for the sentiment classifier

use thiserror::Error;

/// Result type for classifier operations
pub type SentimentResult<T> = Result<T, SentimentError>;

/// Errors raised when the analyzer cannot score a text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SentimentError {
    #[error("Sentiment analyzer failed: {0}")]
    Analyzer(String),

    #[error("Sentiment analyzer returned no '{0}' score")]
    MissingScore(&'static str),

    #[error("Sentiment analyzer returned a non-finite {name} score: {value}")]
    InvalidScore { name: &'static str, value: f64 },
}
