use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};

/// Discrete sentiment label attached to a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Map a compound score onto a label.
    ///
    /// Both threshold bands are inclusive: exactly 0.05 is Positive and
    /// exactly -0.05 is Negative.
    pub fn from_score(score: f64) -> Self {
        if score >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full analyzer output for a single text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScores {
    /// Share of the text rated negative (0.0 - 1.0)
    pub negative: f64,

    /// Share of the text rated neutral (0.0 - 1.0)
    pub neutral: f64,

    /// Share of the text rated positive (0.0 - 1.0)
    pub positive: f64,

    /// Normalized overall polarity (-1.0 - 1.0)
    pub compound: f64,
}

impl PolarityScores {
    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::from_score(self.compound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(SentimentLabel::from_score(0.05), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-0.05), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(0.049_999), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.049_999), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_extreme_scores() {
        assert_eq!(SentimentLabel::from_score(1.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-1.0), SentimentLabel::Negative);
    }

    #[test]
    fn test_label_serialization() {
        let json = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(json, "\"Positive\"");
        assert_eq!(SentimentLabel::Neutral.to_string(), "Neutral");
    }

    #[test]
    fn test_polarity_label_uses_compound() {
        let scores = PolarityScores {
            negative: 0.6,
            neutral: 0.4,
            positive: 0.0,
            compound: -0.3,
        };
        assert_eq!(scores.label(), SentimentLabel::Negative);
    }
}
