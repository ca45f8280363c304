//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use asha_chat::ChatOrchestrator;
use asha_core::AshaConfig;
use asha_llm::LlmClient;
use asha_records::RecordStores;

/// Shared application state. Cloned per handler; every field is an `Arc`
/// or cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AshaConfig>,
    pub orchestrator: Arc<ChatOrchestrator>,
    /// Same stores the orchestrator searches.
    pub stores: RecordStores,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: AshaConfig, llm: Arc<dyn LlmClient>, stores: RecordStores) -> Self {
        let orchestrator = ChatOrchestrator::new(llm, stores.clone(), &config.chat);
        Self {
            config: Arc::new(config),
            orchestrator: Arc::new(orchestrator),
            stores,
            start_time: Instant::now(),
        }
    }
}
