//! Router creation and configuration
//!
//! Creates Axum routers for REST API endpoints.

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use hexforge_generator::EncounterGenerator;

use super::handlers::*;
use super::types::AppState;

/// Create REST API router
pub fn create_router(generator: Arc<EncounterGenerator>, allowed_origins: &[String]) -> Router {
    let state = AppState { generator };

    Router::new()
        .route("/health", get(health))
        .route("/mob_set_names", get(mob_set_names))
        .route("/environment_set_names", get(environment_set_names))
        .route("/encounter", post(encounter))
        .with_state(state)
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// CORS policy: an explicit origin allow-list with credentials, all
/// methods and headers mirrored back for allowed origins (wildcards
/// cannot be combined with credentials)
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let mut origins: Vec<HeaderValue> = Vec::new();
    for origin in allowed_origins {
        match origin.parse::<HeaderValue>() {
            Ok(value) => origins.push(value),
            Err(_) => warn!("Ignoring invalid CORS origin: {}", origin),
        }
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
