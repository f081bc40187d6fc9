//! Route configuration for the assistant endpoints.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{list_messages, send_message};

/// Creates the assistant router.
///
/// Routes:
/// - `GET  /api/assistant/messages` - the transcript, oldest first
/// - `POST /api/assistant/messages` - send a message, get both turns
pub fn assistant_router() -> Router<AppState> {
    Router::new().route(
        "/api/assistant/messages",
        get(list_messages).post(send_message),
    )
}
