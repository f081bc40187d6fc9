//! Route configuration for the showcase endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{add_showcase_item, list_showcase};

/// Creates the showcase router.
///
/// Routes:
/// - `GET  /api/showcase` - the catalog with `added` flags
/// - `POST /api/showcase/:id/add` - convert an entry into an expense
pub fn showcase_router() -> Router<AppState> {
    Router::new()
        .route("/api/showcase", get(list_showcase))
        .route("/api/showcase/:id/add", post(add_showcase_item))
}
