//! REST API endpoints for the Dashboard Gateway
//!
//! - `GET /` liveness text
//! - `GET /api/players` player summaries
//! - `GET /api/player/<player_id>` player detail with sentiment
//! - `GET /health` health check

use player_feed::{LookupError, PlayerLookupService};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};
use warp::http::StatusCode;
use warp::Filter;

use crate::HOME_MESSAGE;

/// Request headers browsers may send cross-origin
pub const CORS_ALLOWED_HEADERS: &[&str] = &[
    "accept",
    "authorization",
    "cache-control",
    "content-type",
    "origin",
    "x-requested-with",
];

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// HTTP status for a lookup failure
pub fn status_for(err: &LookupError) -> StatusCode {
    match err {
        LookupError::NotFound(_) => StatusCode::NOT_FOUND,
        LookupError::UpstreamUnavailable(_) | LookupError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn error_reply(err: &LookupError) -> warp::reply::WithStatus<warp::reply::Json> {
    let status = status_for(err);
    if status.is_server_error() {
        error!("Request failed: {}", err);
    } else {
        warn!("Request rejected: {}", err);
    }

    let body = ErrorResponse {
        error: err.to_string(),
    };
    warp::reply::with_status(warp::reply::json(&body), status)
}

/// Get all players with a name, team and position
pub async fn list_players(
    service: Arc<PlayerLookupService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match service.list_players().await {
        Ok(players) => Ok(warp::reply::with_status(
            warp::reply::json(&players),
            StatusCode::OK,
        )),
        Err(e) => Ok(error_reply(&e)),
    }
}

/// Get one player's detail by name
pub async fn get_player_detail(
    raw_player_id: String,
    service: Arc<PlayerLookupService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    // Path segments arrive percent-encoded ("Christian%20McCaffrey")
    let player_id = match urlencoding::decode(&raw_player_id) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw_player_id.clone(),
    };
    info!("Player detail requested for '{}'", player_id);

    match service.player_detail(&player_id).await {
        Ok(detail) => Ok(warp::reply::with_status(
            warp::reply::json(&detail),
            StatusCode::OK,
        )),
        Err(e) => Ok(error_reply(&e)),
    }
}

/// Create REST API routes
pub fn create_routes(
    service: Arc<PlayerLookupService>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let service_filter = warp::any().map(move || service.clone());

    // Liveness text
    let home = warp::path::end().and(warp::get()).map(|| HOME_MESSAGE);

    let all_players = warp::path("api")
        .and(warp::path("players"))
        .and(warp::path::end())
        .and(warp::get())
        .and(service_filter.clone())
        .and_then(list_players);

    let player_detail = warp::path("api")
        .and(warp::path("player"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(service_filter)
        .and_then(get_player_detail);

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| {
            warp::reply::json(&serde_json::json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        });

    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(CORS_ALLOWED_HEADERS.iter().copied())
        .allow_methods(vec!["GET", "OPTIONS"]);

    home.or(all_players)
        .or(player_detail)
        .or(health)
        .with(cors)
}
