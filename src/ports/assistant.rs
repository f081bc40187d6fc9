//! Assistant Provider Port - interface to generative-chat services.
//!
//! The port abstracts the external generative-language API behind a
//! provider-agnostic request/reply pair. Implementations are stateless:
//! all conversational memory arrives in the request history, so one
//! provider instance serves every call.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::chat::ChatRole;

/// Port for generative-chat completions.
#[async_trait]
pub trait AssistantProvider: Send + Sync {
    /// Generates one reply for the given conversation.
    async fn generate(&self, request: ChatRequest) -> Result<ChatReply, AssistantError>;

    /// Provider information (name, model).
    fn provider_info(&self) -> ProviderInfo;
}

/// One prior turn of the conversation, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Who produced the turn.
    pub role: ChatRole,
    /// Turn text.
    pub text: String,
}

impl ChatTurn {
    /// Creates a turn.
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    /// Creates a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    /// Creates a model turn.
    pub fn model(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Model, text)
    }
}

/// Request for one assistant reply.
///
/// `turns` carries the full prior history plus the new user message as
/// the final turn, in chronological order.
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    /// Persona/system instruction guiding the model.
    pub system_instruction: Option<String>,
    /// Conversation turns, oldest first; the last turn is the new
    /// user message.
    pub turns: Vec<ChatTurn>,
    /// Sampling temperature.
    pub temperature: Option<f32>,
}

impl ChatRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the system instruction.
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// Appends one turn.
    pub fn with_turn(mut self, turn: ChatTurn) -> Self {
        self.turns.push(turn);
        self
    }

    /// Appends a whole history.
    pub fn with_turns(mut self, turns: impl IntoIterator<Item = ChatTurn>) -> Self {
        self.turns.extend(turns);
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Reply from the assistant service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// Generated text; may be empty when the model produced no content.
    pub text: String,
    /// Model that generated the reply.
    pub model: String,
}

/// Provider information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g. "gemini").
    pub name: String,
    /// Model identifier (e.g. "gemini-2.5-flash").
    pub model: String,
}

impl ProviderInfo {
    /// Creates new provider info.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Assistant provider errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AssistantError {
    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// Failed to parse the provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The provider rejected the request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl AssistantError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_collects_turns_in_order() {
        let request = ChatRequest::new()
            .with_system_instruction("Seja gentil")
            .with_turn(ChatTurn::model("Olá!"))
            .with_turn(ChatTurn::user("Oi"))
            .with_temperature(0.7);

        assert_eq!(request.system_instruction.as_deref(), Some("Seja gentil"));
        assert_eq!(request.turns.len(), 2);
        assert_eq!(request.turns[0].role, ChatRole::Model);
        assert_eq!(request.turns[1].role, ChatRole::User);
        assert_eq!(request.temperature, Some(0.7));
    }

    #[test]
    fn errors_display_their_context() {
        assert_eq!(
            AssistantError::rate_limited(30).to_string(),
            "rate limited: retry after 30s"
        );
        assert_eq!(
            AssistantError::Timeout { timeout_secs: 25 }.to_string(),
            "request timed out after 25s"
        );
    }
}
