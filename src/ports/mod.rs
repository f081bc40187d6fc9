//! Ports - interfaces the domain expects the outside world to fulfil.

mod assistant;

pub use assistant::{
    AssistantError, AssistantProvider, ChatReply, ChatRequest, ChatTurn, ProviderInfo,
};
