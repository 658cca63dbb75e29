//! Error types for player lookups

use sentiment_classifier::SentimentError;
use thiserror::Error;

/// Result type for player lookups
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors that can occur while serving a player lookup
#[derive(Error, Debug)]
pub enum LookupError {
    /// Network failure or non-2xx status from the upstream API
    #[error("Failed to fetch data from external API: {0}")]
    UpstreamUnavailable(String),

    /// No upstream record matched the requested player name
    #[error("Player not found.")]
    NotFound(String),

    #[error("An unexpected error occurred: {0}")]
    Internal(String),
}

impl From<SentimentError> for LookupError {
    fn from(err: SentimentError) -> Self {
        LookupError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Internal(format!("Malformed player data: {err}"))
    }
}
