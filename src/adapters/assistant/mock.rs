//! Mock assistant provider for testing.
//!
//! Configurable to return queued replies or inject errors, with call
//! capture for verification, so tests never touch the real API.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAssistantProvider::new()
//!     .with_reply("Olá, noivos!");
//!
//! let reply = provider.generate(request).await?;
//! assert_eq!(reply.text, "Olá, noivos!");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{AssistantError, AssistantProvider, ChatReply, ChatRequest, ProviderInfo};

/// A configured mock outcome.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return a successful reply with this text.
    Text(String),
    /// Return an error.
    Error(AssistantError),
}

/// Mock assistant provider.
///
/// Queued outcomes are consumed in order; once the queue is empty every
/// call returns a fixed default reply.
#[derive(Debug, Clone, Default)]
pub struct MockAssistantProvider {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockAssistantProvider {
    /// Creates a new mock provider with an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Text(text.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: AssistantError) -> Self {
        self.replies.lock().unwrap().push_back(MockReply::Error(error));
        self
    }

    /// Requests captured so far, in call order.
    pub fn calls(&self) -> Vec<ChatRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AssistantProvider for MockAssistantProvider {
    async fn generate(&self, request: ChatRequest) -> Result<ChatReply, AssistantError> {
        self.calls.lock().unwrap().push(request);

        match self.replies.lock().unwrap().pop_front() {
            Some(MockReply::Text(text)) => Ok(ChatReply {
                text,
                model: "mock-model".to_string(),
            }),
            Some(MockReply::Error(error)) => Err(error),
            None => Ok(ChatReply {
                text: "mock reply".to_string(),
                model: "mock-model".to_string(),
            }),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock-model")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ChatTurn;

    #[tokio::test]
    async fn replies_are_consumed_in_order() {
        let provider = MockAssistantProvider::new()
            .with_reply("primeira")
            .with_error(AssistantError::unavailable("down"))
            .with_reply("terceira");

        let request = || ChatRequest::new().with_turn(ChatTurn::user("oi"));

        assert_eq!(provider.generate(request()).await.unwrap().text, "primeira");
        assert!(provider.generate(request()).await.is_err());
        assert_eq!(provider.generate(request()).await.unwrap().text, "terceira");
        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test]
    async fn captures_the_requests_it_receives() {
        let provider = MockAssistantProvider::new().with_reply("ok");
        let request = ChatRequest::new()
            .with_system_instruction("persona")
            .with_turn(ChatTurn::user("Qual o cardápio?"));

        provider.generate(request).await.unwrap();

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].turns[0].text, "Qual o cardápio?");
        assert_eq!(calls[0].system_instruction.as_deref(), Some("persona"));
    }
}
