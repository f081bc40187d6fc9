//! HTTP handlers for the showcase endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};

use crate::adapters::http::budget::dto::ExpenseResponse;
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::domain::foundation::ShowcaseItemId;
use crate::domain::showcase;

use super::dto::{ShowcaseItemResponse, ShowcaseListQuery};

/// GET /api/showcase - the catalog, each entry flagged `added`.
pub async fn list_showcase(
    State(state): State<AppState>,
    Query(query): Query<ShowcaseListQuery>,
) -> Json<Vec<ShowcaseItemResponse>> {
    let planner = state.planner.read().await;
    let items = showcase::catalog()
        .iter()
        .filter(|item| query.category.map_or(true, |c| item.category == c))
        .map(|item| ShowcaseItemResponse::from_item(item, planner.is_showcase_added(&item.id)))
        .collect();
    Json(items)
}

/// POST /api/showcase/:id/add - convert a catalog entry into an expense.
pub async fn add_showcase_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = ShowcaseItemId::new(id)?;
    let mut planner = state.planner.write().await;
    let expense = planner.add_showcase_item(&id)?;
    Ok((StatusCode::CREATED, Json(ExpenseResponse::from(expense))))
}
