use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::config::FeedConfig;
use crate::error::{LookupError, LookupResult};
use crate::models::UpstreamPlayer;

/// Source of upstream player records
///
/// The default `find_player` fetches the whole season and scans it. A source
/// with an indexed or cached lookup overrides it; callers do not change.
#[async_trait]
pub trait PlayerSource: Send + Sync {
    /// Fetch every player record for a season, in upstream order
    async fn fetch_players(&self, season: u16) -> LookupResult<Vec<UpstreamPlayer>>;

    /// First record whose name matches `name` ignoring case
    async fn find_player(
        &self,
        season: u16,
        name: &str,
    ) -> LookupResult<Option<UpstreamPlayer>> {
        let players = self.fetch_players(season).await?;
        Ok(find_by_name(players, name))
    }
}

/// Linear scan, first match wins
pub fn find_by_name(players: Vec<UpstreamPlayer>, name: &str) -> Option<UpstreamPlayer> {
    players.into_iter().find(|player| player.name_matches(name))
}

/// Player source backed by the external statistics API
pub struct HttpPlayerSource {
    config: FeedConfig,
    client: Client,
}

impl HttpPlayerSource {
    pub fn new(config: FeedConfig) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl PlayerSource for HttpPlayerSource {
    async fn fetch_players(&self, season: u16) -> LookupResult<Vec<UpstreamPlayer>> {
        let url = self.config.url_for_season(season);
        info!("Fetching {} season players from: {}", season, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::UpstreamUnavailable(e.to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|e| LookupError::UpstreamUnavailable(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::UpstreamUnavailable(e.to_string()))?;
        debug!("Received {} bytes of player data", body.len());

        let players: Vec<UpstreamPlayer> = serde_json::from_str(&body)?;

        info!(
            "Successfully fetched {} player records for season {}",
            players.len(),
            season
        );
        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, team: &str) -> UpstreamPlayer {
        UpstreamPlayer {
            player_name: Some(name.to_string()),
            team: Some(team.to_string()),
            position: Some("RB".to_string()),
            stats: None,
        }
    }

    #[test]
    fn test_find_by_name_first_match_wins() {
        let players = vec![
            player("Josh Jacobs", "GB"),
            player("Christian McCaffrey", "SF"),
            player("CHRISTIAN MCCAFFREY", "CAR"),
        ];

        let found = find_by_name(players, "christian mccaffrey").unwrap();
        assert_eq!(found.team.as_deref(), Some("SF"));
    }

    #[test]
    fn test_find_by_name_no_match() {
        let players = vec![player("Josh Jacobs", "GB")];
        assert!(find_by_name(players, "Josh").is_none());
        assert!(find_by_name(Vec::new(), "Josh Jacobs").is_none());
    }

    #[tokio::test]
    async fn test_connection_refused_is_upstream_unavailable() {
        let config = FeedConfig {
            players_url: "http://127.0.0.1:9/players/{season}".to_string(),
            ..Default::default()
        };
        let source = HttpPlayerSource::new(config).unwrap();

        let err = source.fetch_players(2024).await.unwrap_err();
        assert!(matches!(err, LookupError::UpstreamUnavailable(_)));
    }
}
