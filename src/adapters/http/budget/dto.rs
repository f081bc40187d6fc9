//! JSON request/response shapes for the budget endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::budget::{Category, Expense};

/// Query string for the expense list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseListQuery {
    /// Exact category match; omitted means all.
    pub category: Option<Category>,
    /// Case-insensitive substring search on the name.
    pub search: Option<String>,
}

/// Request to create a custom expense. Amounts arrive in reais.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExpenseRequest {
    pub name: String,
    pub category: Category,
    pub amount: f64,
    pub due_date: Option<NaiveDate>,
    pub note: Option<String>,
}

/// Request to update an expense. Omitted fields stay unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateExpenseRequest {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub amount: Option<f64>,
    pub paid: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub note: Option<String>,
}

/// One expense as the API exposes it.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseResponse {
    pub id: String,
    pub category: Category,
    pub name: String,
    /// Committed amount in reais.
    pub amount: f64,
    /// Committed amount formatted pt-BR ("R$ 45.000,00").
    pub amount_label: String,
    /// Paid amount in reais.
    pub paid: f64,
    pub paid_label: String,
    /// Outstanding amount in reais.
    pub remaining: f64,
    pub is_paid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub custom: bool,
}

impl From<&Expense> for ExpenseResponse {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id().to_string(),
            category: expense.category(),
            name: expense.name().to_string(),
            amount: expense.amount().as_reais(),
            amount_label: expense.amount().format_brl(),
            paid: expense.paid().as_reais(),
            paid_label: expense.paid().format_brl(),
            remaining: expense.remaining().as_reais(),
            is_paid: expense.is_paid(),
            due_date: expense.due_date(),
            note: expense.note().map(str::to_string),
            custom: expense.is_custom(),
        }
    }
}
