use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

use tracing::debug;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::error::{SentimentError, SentimentResult};
use crate::types::{PolarityScores, SentimentLabel};

/// Classifies text with the VADER lexicon analyzer
///
/// The analyzer's lexicons are process-wide statics, so building one per
/// call only copies references. The classifier itself holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentClassifier;

impl SentimentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Compound polarity score in [-1.0, 1.0]
    pub fn score(&self, text: &str) -> SentimentResult<f64> {
        let raw = Self::analyze(text)?;
        read_score(&raw, "compound")
    }

    /// Negative/neutral/positive shares plus the compound score
    pub fn polarity(&self, text: &str) -> SentimentResult<PolarityScores> {
        let raw = Self::analyze(text)?;
        Ok(PolarityScores {
            negative: read_score(&raw, "neg")?,
            neutral: read_score(&raw, "neu")?,
            positive: read_score(&raw, "pos")?,
            compound: read_score(&raw, "compound")?,
        })
    }

    /// Label a text as Positive, Negative or Neutral
    pub fn label(&self, text: &str) -> SentimentResult<SentimentLabel> {
        let score = self.score(text)?;
        let label = SentimentLabel::from_score(score);
        debug!("Classified text as {} (compound {:.4})", label, score);
        Ok(label)
    }

    fn analyze(text: &str) -> SentimentResult<HashMap<String, f64>> {
        // A panic inside the analyzer means it could not process this input
        panic::catch_unwind(AssertUnwindSafe(|| {
            let analyzer = SentimentIntensityAnalyzer::new();
            analyzer
                .polarity_scores(text)
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect::<HashMap<String, f64>>()
        }))
        .map_err(|payload| SentimentError::Analyzer(panic_message(payload.as_ref())))
    }
}

fn read_score(raw: &HashMap<String, f64>, name: &'static str) -> SentimentResult<f64> {
    let value = *raw.get(name).ok_or(SentimentError::MissingScore(name))?;
    if !value.is_finite() {
        return Err(SentimentError::InvalidScore { name, value });
    }
    Ok(value)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "analyzer panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_sentences() {
        let classifier = SentimentClassifier::new();

        assert_eq!(classifier.label("He is a great player").unwrap(), SentimentLabel::Positive);
        assert_eq!(
            classifier.label("He will never be good at his sport").unwrap(),
            SentimentLabel::Negative
        );
        assert_eq!(classifier.label("He is a football player").unwrap(), SentimentLabel::Neutral);
    }

    #[test]
    fn test_score_is_bounded() {
        let classifier = SentimentClassifier::new();

        for text in [
            "AMAZING!!! Best player EVER, truly incredible and wonderful!!!",
            "Terrible, awful, horrible, the worst disaster of a season!!!",
            "Fans are talking about him this week.",
        ] {
            let score = classifier.score(text).unwrap();
            assert!((-1.0..=1.0).contains(&score), "score {score} out of range for {text:?}");
        }
    }

    #[test]
    fn test_polarity_breakdown_matches_score() {
        let classifier = SentimentClassifier::new();
        let text = "He is a great player";

        let polarity = classifier.polarity(text).unwrap();
        assert_eq!(polarity.compound, classifier.score(text).unwrap());
        assert!(polarity.positive > 0.0);
        assert_eq!(polarity.label(), SentimentLabel::Positive);
    }

    #[test]
    fn test_read_score_rejects_missing_and_non_finite() {
        let mut raw = HashMap::new();
        assert_eq!(read_score(&raw, "compound"), Err(SentimentError::MissingScore("compound")));

        raw.insert("compound".to_string(), f64::NAN);
        assert!(matches!(
            read_score(&raw, "compound"),
            Err(SentimentError::InvalidScore { name: "compound", .. })
        ));
    }
}
