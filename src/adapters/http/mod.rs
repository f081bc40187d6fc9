//! HTTP adapters - the REST boundary over the planner.
//!
//! Each feature has its own module with DTOs, handlers, and routes;
//! [`api_router`] assembles them over one shared [`AppState`].

pub mod assistant;
pub mod budget;
pub mod dashboard;
pub mod error;
pub mod guests;
pub mod showcase;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

use axum::response::Json;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;

/// Assembles the full API router.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(dashboard::dashboard_router())
        .merge(budget::budget_router())
        .merge(guests::guests_router())
        .merge(showcase::showcase_router())
        .merge(assistant::assistant_router())
        .route("/health", get(health))
        .with_state(state)
}

/// GET /health - liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// CORS policy derived from the server configuration.
///
/// Explicitly configured origins always win. Without any, development
/// stays wide open for the local frontend; production answers
/// same-origin only.
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<http::HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if !origins.is_empty() {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    } else if server.is_production() {
        CorsLayer::new()
    } else {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
