//! Label text from the command line
//!
//! Usage: classify-text [--scores] [TEXT]...
//! With no TEXT arguments the three reference sentences are classified.

use anyhow::Result;
use clap::Parser;
use sentiment_classifier::SentimentClassifier;
use tracing::Level;

const REFERENCE_SENTENCES: [&str; 3] =
    ["He is a great player", "He will never be good at his sport", "He is a football player"];

#[derive(Parser, Debug)]
#[command(name = "classify-text", about = "Classify text as Positive, Negative or Neutral")]
struct Args {
    /// Print the negative/neutral/positive/compound breakdown
    #[arg(long)]
    scores: bool,

    /// Texts to classify
    texts: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::WARN).init();

    let args = Args::parse();
    let classifier = SentimentClassifier::new();

    let texts: Vec<String> = if args.texts.is_empty() {
        REFERENCE_SENTENCES.iter().map(|s| s.to_string()).collect()
    } else {
        args.texts
    };

    for text in &texts {
        if args.scores {
            let polarity = classifier.polarity(text)?;
            println!(
                "Sentiment for '{}': {} (neg {:.3}, neu {:.3}, pos {:.3}, compound {:.4})",
                text,
                polarity.label(),
                polarity.negative,
                polarity.neutral,
                polarity.positive,
                polarity.compound
            );
        } else {
            println!("Sentiment for '{}': {}", text, classifier.label(text)?);
        }
    }

    Ok(())
}
