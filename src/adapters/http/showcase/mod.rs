//! Showcase endpoints - catalog listing and one-shot add-to-budget.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::showcase_router;
