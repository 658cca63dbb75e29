use sentiment_classifier::SentimentLabel;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Stats placeholder in list responses
pub const SUMMARY_STATS_PLACEHOLDER: &str = "not required";

/// Sentiment placeholder in list responses
pub const SUMMARY_SENTIMENT_PLACEHOLDER: &str = "N/A";

/// Team/position value used in detail responses when the upstream omits it
pub const MISSING_FIELD: &str = "N/A";

/// A player record as returned by the upstream statistics API
///
/// Text fields that are absent, null, blank or not strings decode to `None`.
/// `stats` is passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamPlayer {
    #[serde(default, deserialize_with = "lenient_text")]
    pub player_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub team: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub position: Option<String>,

    #[serde(default)]
    pub stats: Option<Value>,
}

impl UpstreamPlayer {
    /// Case-insensitive comparison against the record's player name
    pub fn name_matches(&self, name: &str) -> bool {
        self.player_name.as_deref().is_some_and(|own| own.to_lowercase() == name.to_lowercase())
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text),
        _ => None,
    })
}

/// Reduced player shape for the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    /// Player display name, used as the external key
    pub id: String,
    pub name: String,
    pub team: String,
    pub position: String,
    pub stats: String,
    pub sentiment: String,
}

impl PlayerSummary {
    /// Build a summary, or `None` if the record lacks a name, team or position
    pub fn from_record(record: &UpstreamPlayer) -> Option<Self> {
        let name = record.player_name.as_ref()?;
        let team = record.team.as_ref()?;
        let position = record.position.as_ref()?;

        Some(Self {
            id: name.clone(),
            name: name.clone(),
            team: team.clone(),
            position: position.clone(),
            stats: SUMMARY_STATS_PLACEHOLDER.to_string(),
            sentiment: SUMMARY_SENTIMENT_PLACEHOLDER.to_string(),
        })
    }
}

/// Full player payload for the detail endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDetail {
    pub id: String,
    pub name: String,
    pub team: String,
    pub position: String,

    /// Upstream stats object, verbatim (e.g. "passing", "rushing", "receiving")
    pub detailed_stats: Value,

    pub sentiment: SentimentLabel,
}
