//! HTTP handlers for the guest endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::domain::foundation::GuestId;
use crate::domain::guests::{Guest, GuestFilter, GuestSummary};

use super::dto::{
    CreateGuestRequest, GuestListQuery, GuestListResponse, GuestResponse, UpdateGuestRequest,
};

/// GET /api/guests - filtered list plus summary counts.
///
/// The summary always covers the whole collection, not the filtered
/// subset, matching the stat cards above the list.
pub async fn list_guests(
    State(state): State<AppState>,
    Query(query): Query<GuestListQuery>,
) -> Json<GuestListResponse> {
    let mut filter = GuestFilter::all();
    if let Some(rsvp) = query.rsvp {
        filter = filter.with_rsvp(rsvp);
    }
    if let Some(search) = query.search {
        filter = filter.with_search(search);
    }

    let planner = state.planner.read().await;
    let guests = filter
        .apply(planner.guests())
        .into_iter()
        .map(GuestResponse::from)
        .collect();

    Json(GuestListResponse {
        guests,
        summary: GuestSummary::from_guests(planner.guests()),
    })
}

/// POST /api/guests - invite a guest (always Pendente).
pub async fn create_guest(
    State(state): State<AppState>,
    Json(request): Json<CreateGuestRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::BadRequest("name must not be blank".to_string()));
    }

    let mut guest = Guest::new(request.name, request.age_group, request.side);
    guest.set_table(request.table);

    let mut planner = state.planner.write().await;
    let created = planner.add_guest(guest);
    Ok((StatusCode::CREATED, Json(GuestResponse::from(created))))
}

/// PUT /api/guests/:id - partial update, last write wins.
pub async fn update_guest(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateGuestRequest>,
) -> Result<Json<GuestResponse>, ApiError> {
    let id = parse_guest_id(&id)?;

    let mut planner = state.planner.write().await;
    let mut guest = planner
        .guest(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Guest not found: {}", id)))?
        .clone();

    if let Some(name) = request.name {
        if name.trim().is_empty() {
            return Err(ApiError::BadRequest("name must not be blank".to_string()));
        }
        guest.rename(name);
    }
    if let Some(age_group) = request.age_group {
        guest.set_age_group(age_group);
    }
    if let Some(side) = request.side {
        guest.set_side(side);
    }
    if let Some(rsvp) = request.rsvp {
        guest.set_rsvp(rsvp);
    }
    if let Some(table) = request.table {
        guest.set_table(Some(table));
    }

    let updated = planner.update_guest(guest)?;
    Ok(Json(GuestResponse::from(updated)))
}

/// DELETE /api/guests/:id - remove unconditionally.
pub async fn delete_guest(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_guest_id(&id)?;
    let mut planner = state.planner.write().await;
    planner.remove_guest(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/guests/:id/toggle-rsvp - advance one step along the cycle.
pub async fn toggle_guest_rsvp(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GuestResponse>, ApiError> {
    let id = parse_guest_id(&id)?;
    let mut planner = state.planner.write().await;
    let guest = planner.toggle_guest_rsvp(&id)?;
    Ok(Json(GuestResponse::from(guest)))
}

fn parse_guest_id(raw: &str) -> Result<GuestId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest("Invalid guest ID format".to_string()))
}
