//! Budget endpoints - expense CRUD, filtering, and the paid toggle.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::budget_router;
