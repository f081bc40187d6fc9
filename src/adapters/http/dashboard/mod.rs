//! Dashboard endpoint - headline numbers and the wedding countdown.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::dashboard_router;
