//! Assistant provider adapters.

mod gemini;
mod mock;

pub use gemini::{GeminiConfig, GeminiProvider};
pub use mock::{MockAssistantProvider, MockReply};
