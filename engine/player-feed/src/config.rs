use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::DEFAULT_SEASON;

/// Placeholder substituted with the season year in `players_url`
pub const SEASON_PLACEHOLDER: &str = "{season}";

/// Configuration for the upstream player statistics API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// URL template for the season player list, e.g. "https://host/players/{season}"
    pub players_url: String,

    /// Season year requested from the upstream API
    pub season: u16,

    /// Request timeout in seconds (None = wait for the upstream indefinitely)
    pub timeout_secs: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            players_url: "http://localhost:8000/api/v1/players/{season}".to_string(),
            season: DEFAULT_SEASON,
            timeout_secs: None,
        }
    }
}

impl FeedConfig {
    /// Override fields with PLAYER_FEED_* environment variables when present
    pub fn apply_env(&mut self) -> anyhow::Result<()> {
        if let Ok(url) = std::env::var("PLAYER_FEED_URL") {
            self.players_url = url;
        }

        if let Ok(season) = std::env::var("PLAYER_FEED_SEASON") {
            self.season = season
                .parse()
                .with_context(|| format!("Invalid PLAYER_FEED_SEASON: '{season}'"))?;
        }

        if let Ok(timeout) = std::env::var("PLAYER_FEED_TIMEOUT_SECS") {
            self.timeout_secs = Some(
                timeout
                    .parse()
                    .with_context(|| format!("Invalid PLAYER_FEED_TIMEOUT_SECS: '{timeout}'"))?,
            );
        }

        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.players_url.contains(SEASON_PLACEHOLDER) {
            anyhow::bail!(
                "Player feed URL '{}' must contain the {} placeholder",
                self.players_url,
                SEASON_PLACEHOLDER
            );
        }

        if self.timeout_secs == Some(0) {
            anyhow::bail!("Player feed timeout must be greater than zero");
        }

        Ok(())
    }

    /// Upstream URL for `season`
    pub fn url_for_season(&self, season: u16) -> String {
        self.players_url.replace(SEASON_PLACEHOLDER, &season.to_string())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
