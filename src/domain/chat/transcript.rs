//! Append-only conversation transcript.
//!
//! # Invariants
//!
//! - Turns are appended in the order they were issued and answered;
//!   nothing is ever reordered, edited, or removed.
//! - All conversational memory lives here: the gateway is stateless and
//!   receives the full history on every call.

use serde::Serialize;

use super::{ChatMessage, ChatRole};

/// Opening turn shown before the couple has said anything.
const WELCOME_TEXT: &str = "Olá! Sou a Indaiá Assistente. 💕\n\nEstou aqui para ajudar com \
detalhes do seu casamento. Pergunte sobre etiqueta, cardápio, decoração ou cronograma.";

/// Ordered sequence of chat turns.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// An empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// A transcript opened with the concierge welcome turn.
    pub fn with_welcome() -> Self {
        let mut transcript = Self::new();
        transcript.push(ChatMessage::model(WELCOME_TEXT));
        transcript
    }

    /// Appends a turn at the end.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// All turns, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when no turn has been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent turn, if any.
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}
