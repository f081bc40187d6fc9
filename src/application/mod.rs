//! Application layer - use-case services over the domain and ports.

mod assistant;

pub use assistant::{AssistantGateway, FALLBACK_REPLY, RETRY_REPLY};
