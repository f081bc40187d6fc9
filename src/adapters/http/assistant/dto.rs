//! JSON shapes for the assistant endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::chat::{ChatMessage, ChatRole};

/// Request to send one message to the concierge.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

/// One transcript turn as the API exposes it.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessageResponse {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    /// Creation time, RFC 3339.
    pub timestamp: String,
}

impl From<&ChatMessage> for ChatMessageResponse {
    fn from(message: &ChatMessage) -> Self {
        Self {
            id: message.id().to_string(),
            role: message.role(),
            text: message.text().to_string(),
            timestamp: message.timestamp().as_datetime().to_rfc3339(),
        }
    }
}

/// The pair of turns produced by one send.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageResponse {
    pub user: ChatMessageResponse,
    pub model: ChatMessageResponse,
}
