//! Adapters - concrete implementations of the ports plus the HTTP
//! boundary.

pub mod assistant;
pub mod http;
