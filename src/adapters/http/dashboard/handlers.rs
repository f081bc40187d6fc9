//! HTTP handler for the dashboard overview.

use axum::extract::State;
use axum::response::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::domain::foundation::Timestamp;

use super::dto::{DashboardResponse, StatsResponse};

/// GET /api/dashboard - headline numbers plus the countdown.
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, ApiError> {
    // The date is validated at startup; a parse failure here means the
    // configuration changed underneath us.
    let wedding_date = state
        .event
        .wedding_date()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    let stats = state.planner.read().await.stats();

    Ok(Json(DashboardResponse {
        couple_name: state.event.couple_name.clone(),
        venue_name: state.event.venue_name.clone(),
        wedding_date: state.event.wedding_date.clone(),
        days_until_wedding: Timestamp::days_until(wedding_date),
        stats: StatsResponse::from(stats),
    }))
}
