//! Dashboard statistics - pure derivation over the owned collections.

use serde::Serialize;

use crate::domain::budget::Expense;
use crate::domain::foundation::Money;
use crate::domain::guests::{Guest, RsvpStatus};

/// Aggregate numbers shown on the dashboard.
///
/// Never stored: recomputed from the current expense and guest
/// collections on every read. The collections are bounded by manual
/// data entry, so no memoization is needed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Sum of all committed amounts.
    pub total_budget: Money,
    /// Sum of all paid amounts.
    pub total_paid: Money,
    /// Budget minus paid.
    pub total_pending: Money,
    /// Payment progress in percent, within [0, 100]. Zero budget means
    /// zero progress, not NaN.
    pub progress: f64,
    /// Number of invitees.
    pub guest_count: usize,
    /// Number of confirmed invitees.
    pub confirmed_guests: usize,
}

impl DashboardStats {
    /// Computes the statistics from the current collections.
    pub fn compute(expenses: &[Expense], guests: &[Guest]) -> Self {
        let total_budget: Money = expenses.iter().map(|e| e.amount()).sum();
        let total_paid: Money = expenses.iter().map(|e| e.paid()).sum();
        let total_pending = total_budget.saturating_sub(total_paid);

        let progress = if total_budget.is_zero() {
            0.0
        } else {
            let ratio = total_paid.centavos() as f64 / total_budget.centavos() as f64;
            (ratio * 100.0).clamp(0.0, 100.0)
        };

        Self {
            total_budget,
            total_paid,
            total_pending,
            progress,
            guest_count: guests.len(),
            confirmed_guests: guests
                .iter()
                .filter(|g| g.rsvp() == RsvpStatus::Confirmed)
                .count(),
        }
    }
}
