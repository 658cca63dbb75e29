//! Player Feed
//!
//! Fetches NFL player records from the external statistics API and reshapes
//! them for the dashboard: a reduced summary list, or a single player's detail
//! with a sentiment label attached to a sample mention of that player.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod lookup;
pub mod mentions;
pub mod models;

pub use config::FeedConfig;
pub use error::{LookupError, LookupResult};
pub use fetcher::{HttpPlayerSource, PlayerSource};
pub use lookup::PlayerLookupService;
pub use mentions::{RandomPicker, SeededPicker, TextPicker};
pub use models::{PlayerDetail, PlayerSummary, UpstreamPlayer};

/// Season requested from the upstream API unless configured otherwise
pub const DEFAULT_SEASON: u16 = 2024;
