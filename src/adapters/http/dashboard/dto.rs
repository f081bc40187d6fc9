//! JSON shape of the dashboard overview.

use serde::Serialize;

use crate::domain::planner::DashboardStats;

/// Headline numbers in reais plus formatted labels.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub total_budget: f64,
    pub total_budget_label: String,
    pub total_paid: f64,
    pub total_paid_label: String,
    pub total_pending: f64,
    pub total_pending_label: String,
    /// Payment progress percentage, within [0, 100].
    pub progress: f64,
    pub guest_count: usize,
    pub confirmed_guests: usize,
}

impl From<DashboardStats> for StatsResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_budget: stats.total_budget.as_reais(),
            total_budget_label: stats.total_budget.format_brl(),
            total_paid: stats.total_paid.as_reais(),
            total_paid_label: stats.total_paid.format_brl(),
            total_pending: stats.total_pending.as_reais(),
            total_pending_label: stats.total_pending.format_brl(),
            progress: stats.progress,
            guest_count: stats.guest_count,
            confirmed_guests: stats.confirmed_guests,
        }
    }
}

/// The dashboard overview.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub couple_name: String,
    pub venue_name: String,
    /// Wedding date, `YYYY-MM-DD`.
    pub wedding_date: String,
    /// Whole days from today until the wedding; negative once past.
    pub days_until_wedding: i64,
    pub stats: StatsResponse,
}
