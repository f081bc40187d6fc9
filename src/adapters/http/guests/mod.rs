//! Guest-list endpoints - CRUD, filtering, and the RSVP toggle.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::guests_router;
