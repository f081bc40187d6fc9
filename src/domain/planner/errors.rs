//! Error types for planner operations.

use thiserror::Error;

use crate::domain::foundation::{ExpenseId, GuestId, ShowcaseItemId};

/// Errors reported by planner mutations.
///
/// Every operation is total: on error the owned collections are
/// unchanged. Misses are reported rather than silently swallowed so the
/// boundary can surface them.
#[derive(Debug, Clone, Error)]
pub enum PlannerError {
    /// No expense with the given id.
    #[error("Expense not found: {0}")]
    ExpenseNotFound(ExpenseId),

    /// Seeded contract items cannot be deleted.
    #[error("Expense {0} is part of the contract and cannot be removed")]
    SeededExpense(ExpenseId),

    /// No guest with the given id.
    #[error("Guest not found: {0}")]
    GuestNotFound(GuestId),

    /// No showcase entry with the given id.
    #[error("Showcase item not found: {0}")]
    ShowcaseItemNotFound(ShowcaseItemId),

    /// The showcase entry was already added to the budget.
    #[error("Showcase item {0} was already added to the budget")]
    AlreadyAdded(ShowcaseItemId),
}
