//! Shared application state for the REST boundary.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::application::AssistantGateway;
use crate::config::EventConfig;
use crate::domain::chat::Transcript;
use crate::domain::planner::Planner;

/// Dependencies shared by every handler.
///
/// The planner sits behind an `RwLock` so list reads run concurrently.
/// The transcript uses a `Mutex` held across the provider call, which
/// serializes assistant sends: a second message waits until the current
/// reply has been appended.
#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<RwLock<Planner>>,
    pub transcript: Arc<Mutex<Transcript>>,
    pub gateway: Arc<AssistantGateway>,
    pub event: EventConfig,
}

impl AppState {
    /// Wires the state, opening the transcript with the welcome turn.
    pub fn new(planner: Planner, gateway: AssistantGateway, event: EventConfig) -> Self {
        Self {
            planner: Arc::new(RwLock::new(planner)),
            transcript: Arc::new(Mutex::new(Transcript::with_welcome())),
            gateway: Arc::new(gateway),
            event,
        }
    }
}
