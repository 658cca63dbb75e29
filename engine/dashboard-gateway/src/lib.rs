//! Dashboard Gateway - REST API for the fantasy football dashboard
//!
//! Exposes the player list and player detail views over HTTP, with
//! permissive CORS so the browser frontend can call it from any origin.

pub mod config;
pub mod logging;
pub mod rest_api;


pub use config::{load_configuration, GatewayConfig};
pub use logging::initialize_logging;
pub use rest_api::create_routes;

/// Plain-text body served at `/`
pub const HOME_MESSAGE: &str = "Fantasy Football Backend is running!";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;
