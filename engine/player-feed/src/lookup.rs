use sentiment_classifier::SentimentClassifier;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{LookupError, LookupResult};
use crate::fetcher::PlayerSource;
use crate::mentions::{select_mention, RandomPicker, TextPicker};
use crate::models::{PlayerDetail, PlayerSummary, UpstreamPlayer, MISSING_FIELD};

/// Serves the player list and player detail views
///
/// Holds no per-request state; every call fetches fresh upstream data.
pub struct PlayerLookupService {
    source: Arc<dyn PlayerSource>,
    picker: Arc<dyn TextPicker>,
    classifier: SentimentClassifier,
    season: u16,
}

impl PlayerLookupService {
    /// Create a service that picks sample mentions at random
    pub fn new(source: Arc<dyn PlayerSource>, season: u16) -> Self {
        Self::with_picker(source, Arc::new(RandomPicker), season)
    }

    pub fn with_picker(
        source: Arc<dyn PlayerSource>,
        picker: Arc<dyn TextPicker>,
        season: u16,
    ) -> Self {
        Self {
            source,
            picker,
            classifier: SentimentClassifier::new(),
            season,
        }
    }

    /// All complete upstream records as summaries, in upstream order
    pub async fn list_players(&self) -> LookupResult<Vec<PlayerSummary>> {
        let records = self.source.fetch_players(self.season).await?;
        let total = records.len();

        let players = summarize(&records);
        if players.len() < total {
            debug!("Skipped {} incomplete player records", total - players.len());
        }

        info!("Returning {} player summaries", players.len());
        Ok(players)
    }

    /// Detail for the first player whose name matches `player_id` ignoring case
    pub async fn player_detail(&self, player_id: &str) -> LookupResult<PlayerDetail> {
        let record = self
            .source
            .find_player(self.season, player_id)
            .await?
            .ok_or_else(|| {
                warn!("No player named '{}' in season {}", player_id, self.season);
                LookupError::NotFound(player_id.to_string())
            })?;

        self.build_detail(record)
    }

    fn build_detail(&self, record: UpstreamPlayer) -> LookupResult<PlayerDetail> {
        let name = record.player_name.ok_or_else(|| {
            LookupError::Internal("Matched player record has no name".to_string())
        })?;

        let mention = select_mention(&name, self.picker.as_ref());
        let sentiment = self.classifier.label(&mention)?;
        debug!("Sample mention for {}: '{}' -> {}", name, mention, sentiment);

        Ok(PlayerDetail {
            id: name.clone(),
            name,
            team: record.team.unwrap_or_else(|| MISSING_FIELD.to_string()),
            position: record.position.unwrap_or_else(|| MISSING_FIELD.to_string()),
            detailed_stats: record.stats.unwrap_or_else(|| serde_json::json!({})),
            sentiment,
        })
    }
}

/// Summaries for records carrying a name, team and position
pub fn summarize(records: &[UpstreamPlayer]) -> Vec<PlayerSummary> {
    records.iter().filter_map(PlayerSummary::from_record).collect()
}
