//! Simulated social-media mentions
//!
//! A small fixed table of sentences about well-known players stands in for
//! real social-media ingestion. Players outside the table get generic
//! sentences built from their name. One sentence is picked per request.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sentences for well-known players, keyed by display name
pub const MENTION_TABLE: &[(&str, &[&str])] = &[
    (
        "Patrick Mahomes",
        &[
            "Patrick Mahomes is an incredible quarterback, the best in the league!",
            "Mahomes threw two interceptions and fans are worried about the offense.",
            "Patrick Mahomes will start on Sunday against the Raiders.",
        ],
    ),
    (
        "Christian McCaffrey",
        &[
            "Christian McCaffrey is a fantastic running back and a fantasy superstar!",
            "McCaffrey is dealing with a frustrating Achilles injury again.",
            "Christian McCaffrey practiced on Wednesday.",
        ],
    ),
    (
        "Justin Jefferson",
        &[
            "Justin Jefferson is amazing, the best receiver in football!",
            "Jefferson had a disappointing game with only two catches.",
            "Justin Jefferson lines up on the outside for Minnesota.",
        ],
    ),
    (
        "Travis Kelce",
        &[
            "Travis Kelce is still a great tight end and a reliable target.",
            "Kelce looks slow and his production is declining badly.",
            "Travis Kelce caught four passes in the second half.",
        ],
    ),
    (
        "Josh Allen",
        &[
            "Josh Allen is a brilliant dual-threat quarterback, so fun to watch!",
            "Josh Allen made terrible decisions and fumbled twice.",
            "Josh Allen is listed on the depth chart as the starter.",
        ],
    ),
];

/// Chooses one entry from a non-empty candidate list
pub trait TextPicker: Send + Sync {
    /// Index in `0..len`; `len` is always at least 1
    fn pick_index(&self, len: usize) -> usize;
}

/// Uniform choice with the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl TextPicker for RandomPicker {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Uniform choice with a seeded RNG, reproducible across runs
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl TextPicker for SeededPicker {
    fn pick_index(&self, len: usize) -> usize {
        self.rng.lock().gen_range(0..len)
    }
}

/// Every sentence that may be picked for `player_name`
pub fn candidate_mentions(player_name: &str) -> Vec<String> {
    let lowered = player_name.to_lowercase();
    if let Some((_, sentences)) =
        MENTION_TABLE.iter().find(|(name, _)| name.to_lowercase() == lowered)
    {
        return sentences.iter().map(|s| s.to_string()).collect();
    }

    vec![
        format!("{player_name} had a great game last week!"),
        format!("{player_name} is struggling with an injury and might miss time."),
        format!("{player_name} is listed on the depth chart for Sunday."),
    ]
}

/// Pick one mention of `player_name`
pub fn select_mention(player_name: &str, picker: &dyn TextPicker) -> String {
    let mut candidates = candidate_mentions(player_name);
    let index = picker.pick_index(candidates.len()).min(candidates.len() - 1);
    candidates.swap_remove(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiment_classifier::{SentimentClassifier, SentimentLabel};

    struct FixedPicker(usize);

    impl TextPicker for FixedPicker {
        fn pick_index(&self, _len: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn test_known_player_uses_table() {
        let mentions = candidate_mentions("Patrick Mahomes");
        assert_eq!(mentions.len(), 3);
        assert!(mentions[0].contains("incredible quarterback"));
    }

    #[test]
    fn test_table_lookup_ignores_case() {
        assert_eq!(candidate_mentions("travis kelce"), candidate_mentions("Travis Kelce"));
    }

    #[test]
    fn test_unknown_player_gets_templates() {
        let mentions = candidate_mentions("Puka Nacua");
        assert_eq!(mentions.len(), 3);
        assert!(mentions.iter().all(|m| m.starts_with("Puka Nacua ")));
    }

    #[test]
    fn test_templates_cover_each_label() {
        let classifier = SentimentClassifier::new();
        let labels: Vec<SentimentLabel> = candidate_mentions("Puka Nacua")
            .iter()
            .map(|m| classifier.label(m).unwrap())
            .collect();

        assert_eq!(
            labels,
            vec![
                SentimentLabel::Positive,
                SentimentLabel::Negative,
                SentimentLabel::Neutral,
            ]
        );
    }

    #[test]
    fn test_table_neutral_sentences_label_neutral() {
        let classifier = SentimentClassifier::new();
        for (name, sentences) in MENTION_TABLE {
            let label = classifier.label(sentences[2]).unwrap();
            assert_eq!(label, SentimentLabel::Neutral, "{name}: {}", sentences[2]);
        }
    }

    #[test]
    fn test_select_mention_uses_picker() {
        let mention = select_mention("Justin Jefferson", &FixedPicker(1));
        assert_eq!(mention, "Jefferson had a disappointing game with only two catches.");

        // Out-of-range picks clamp to the last candidate
        let mention = select_mention("Justin Jefferson", &FixedPicker(99));
        assert_eq!(mention, "Justin Jefferson lines up on the outside for Minnesota.");
    }

    #[test]
    fn test_random_picker_stays_in_candidates() {
        let candidates = candidate_mentions("Josh Allen");
        for _ in 0..50 {
            let mention = select_mention("Josh Allen", &RandomPicker);
            assert!(candidates.contains(&mention));
        }
    }

    #[test]
    fn test_seeded_picker_is_reproducible() {
        let first = SeededPicker::new(42);
        let second = SeededPicker::new(42);

        let a: Vec<usize> = (0..20).map(|_| first.pick_index(3)).collect();
        let b: Vec<usize> = (0..20).map(|_| second.pick_index(3)).collect();
        assert_eq!(a, b);
        assert!(a.iter().all(|&i| i < 3));
    }
}
