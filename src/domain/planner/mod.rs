//! Planner module - the aggregate owning all mutable dashboard state.

mod aggregate;
mod errors;
mod stats;

pub use aggregate::Planner;
pub use errors::PlannerError;
pub use stats::DashboardStats;
