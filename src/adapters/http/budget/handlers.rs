//! HTTP handlers for the budget endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::domain::budget::{Expense, ExpenseFilter};
use crate::domain::foundation::{ExpenseId, Money};

use super::dto::{CreateExpenseRequest, ExpenseListQuery, ExpenseResponse, UpdateExpenseRequest};

/// GET /api/expenses - filtered list, original order.
pub async fn list_expenses(
    State(state): State<AppState>,
    Query(query): Query<ExpenseListQuery>,
) -> Json<Vec<ExpenseResponse>> {
    let mut filter = ExpenseFilter::all();
    if let Some(category) = query.category {
        filter = filter.with_category(category);
    }
    if let Some(search) = query.search {
        filter = filter.with_search(search);
    }

    let planner = state.planner.read().await;
    let expenses = filter
        .apply(planner.expenses())
        .into_iter()
        .map(ExpenseResponse::from)
        .collect();
    Json(expenses)
}

/// POST /api/expenses - create a custom expense.
pub async fn create_expense(
    State(state): State<AppState>,
    Json(request): Json<CreateExpenseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::BadRequest("name must not be blank".to_string()));
    }
    let amount = Money::from_reais(request.amount)?;

    let mut expense = Expense::new(request.name, request.category, amount);
    if let Some(due_date) = request.due_date {
        expense = expense.with_due_date(due_date);
    }
    if let Some(note) = request.note {
        expense = expense.with_note(note);
    }

    let mut planner = state.planner.write().await;
    let created = planner.add_expense(expense);
    Ok((StatusCode::CREATED, Json(ExpenseResponse::from(created))))
}

/// PUT /api/expenses/:id - partial update, last write wins.
pub async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateExpenseRequest>,
) -> Result<Json<ExpenseResponse>, ApiError> {
    let id = parse_expense_id(&id)?;

    let mut planner = state.planner.write().await;
    let mut expense = planner
        .expense(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Expense not found: {}", id)))?
        .clone();

    if let Some(name) = request.name {
        if name.trim().is_empty() {
            return Err(ApiError::BadRequest("name must not be blank".to_string()));
        }
        expense.rename(name);
    }
    if let Some(category) = request.category {
        expense.set_category(category);
    }
    if let Some(amount) = request.amount {
        expense.set_amount(Money::from_reais(amount)?);
    }
    if let Some(paid) = request.paid {
        expense.set_paid(Money::from_reais(paid)?);
    }
    if let Some(due_date) = request.due_date {
        expense.set_due_date(Some(due_date));
    }
    if let Some(note) = request.note {
        expense.set_note(Some(note));
    }

    let updated = planner.update_expense(expense)?;
    Ok(Json(ExpenseResponse::from(updated)))
}

/// DELETE /api/expenses/:id - remove a custom expense.
pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_expense_id(&id)?;
    let mut planner = state.planner.write().await;
    planner.remove_expense(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/expenses/:id/toggle-paid - flip the payment state.
pub async fn toggle_expense_paid(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExpenseResponse>, ApiError> {
    let id = parse_expense_id(&id)?;
    let mut planner = state.planner.write().await;
    let expense = planner.toggle_expense_paid(&id)?;
    Ok(Json(ExpenseResponse::from(expense)))
}

fn parse_expense_id(raw: &str) -> Result<ExpenseId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest("Invalid expense ID format".to_string()))
}
