//! Sentiment Classifier - labels short player-related text
//!
//! Wraps the VADER lexicon analyzer and maps its compound polarity score
//! onto three discrete labels using fixed thresholds.

pub mod classifier;
pub mod error;
pub mod types;

pub use classifier::SentimentClassifier;
pub use error::{SentimentError, SentimentResult};
pub use types::{PolarityScores, SentimentLabel};

/// Compound scores at or above this value are labelled Positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound scores at or below this value are labelled Negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;
