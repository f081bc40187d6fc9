//! Route configuration for the budget endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::{
    create_expense, delete_expense, list_expenses, toggle_expense_paid, update_expense,
};

/// Creates the budget router.
///
/// Routes:
/// - `GET    /api/expenses` - filtered expense list
/// - `POST   /api/expenses` - create a custom expense
/// - `PUT    /api/expenses/:id` - update an expense
/// - `DELETE /api/expenses/:id` - remove a custom expense
/// - `POST   /api/expenses/:id/toggle-paid` - flip payment state
pub fn budget_router() -> Router<AppState> {
    Router::new()
        .route("/api/expenses", get(list_expenses).post(create_expense))
        .route(
            "/api/expenses/:id",
            axum::routing::put(update_expense).delete(delete_expense),
        )
        .route("/api/expenses/:id/toggle-paid", post(toggle_expense_paid))
}
