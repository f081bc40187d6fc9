//! Route configuration for the guest endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{create_guest, delete_guest, list_guests, toggle_guest_rsvp, update_guest};

/// Creates the guest-list router.
///
/// Routes:
/// - `GET    /api/guests` - filtered list plus summary counts
/// - `POST   /api/guests` - invite a guest
/// - `PUT    /api/guests/:id` - update a guest
/// - `DELETE /api/guests/:id` - remove a guest
/// - `POST   /api/guests/:id/toggle-rsvp` - advance the RSVP cycle
pub fn guests_router() -> Router<AppState> {
    Router::new()
        .route("/api/guests", get(list_guests).post(create_guest))
        .route("/api/guests/:id", put(update_guest).delete(delete_guest))
        .route("/api/guests/:id/toggle-rsvp", post(toggle_guest_rsvp))
}
