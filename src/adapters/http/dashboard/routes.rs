//! Route configuration for the dashboard endpoint.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::get_dashboard;

/// Creates the dashboard router.
///
/// Routes:
/// - `GET /api/dashboard` - stats, countdown, and event details
pub fn dashboard_router() -> Router<AppState> {
    Router::new().route("/api/dashboard", get(get_dashboard))
}
