//! Chat message - one turn in the concierge transcript.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ChatMessageId, Timestamp};

/// Who produced a transcript turn.
///
/// The assistant side is called `model`, matching the wire role the
/// generative-language API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One turn in the transcript. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique identifier.
    id: ChatMessageId,

    /// Who produced the turn.
    role: ChatRole,

    /// Text body.
    text: String,

    /// Creation time.
    timestamp: Timestamp,
}

impl ChatMessage {
    /// Creates a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    /// Creates a model turn.
    pub fn model(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Model, text)
    }

    fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: ChatMessageId::new(),
            role,
            text: text.into(),
            timestamp: Timestamp::now(),
        }
    }

    /// Returns the message id.
    pub fn id(&self) -> &ChatMessageId {
        &self.id
    }

    /// Returns who produced the turn.
    pub fn role(&self) -> ChatRole {
        self.role
    }

    /// Returns the text body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the creation time.
    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }
}
