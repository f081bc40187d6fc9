//! Assistant endpoints - the concierge transcript.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::assistant_router;
