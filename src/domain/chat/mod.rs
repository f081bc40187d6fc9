//! Chat module - the concierge transcript.

mod message;
mod transcript;

pub use message::{ChatMessage, ChatRole};
pub use transcript::Transcript;
