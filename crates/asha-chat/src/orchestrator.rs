//! Chat orchestrator: runs one message through the pipeline.
//!
//! Order per message: classify, optionally rewrite, record the user turn,
//! look up records for every domain the intent names, compose, record the
//! reply, trim. Only validation and composition failures reach the caller.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use asha_core::config::ChatConfig;
use asha_core::ChatTurn;
use asha_llm::LlmClient;
use asha_records::{DomainQuery, RecordSearch, RecordStores};

use crate::bias::BiasMitigator;
use crate::error::ChatError;
use crate::intent::IntentClassifier;
use crate::response::ResponseComposer;
use crate::session::SessionStore;
use crate::types::ChatResponse;

pub struct ChatOrchestrator {
    classifier: IntentClassifier,
    mitigator: BiasMitigator,
    composer: ResponseComposer,
    sessions: SessionStore,
    stores: RecordStores,
    max_message_length: usize,
}

impl ChatOrchestrator {
    pub fn new(llm: Arc<dyn LlmClient>, stores: RecordStores, config: &ChatConfig) -> Self {
        Self {
            classifier: IntentClassifier::new(llm.clone()),
            mitigator: BiasMitigator::new(llm.clone()),
            composer: ResponseComposer::new(llm),
            sessions: SessionStore::new(config.max_history),
            stores,
            max_message_length: config.max_message_length,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn stores(&self) -> &RecordStores {
        &self.stores
    }

    /// Handle one inbound message. A missing or blank `session_id` starts
    /// a new session.
    pub async fn handle_message(
        &self,
        message: &str,
        session_id: Option<&str>,
    ) -> Result<ChatResponse, ChatError> {
        self.validate(message)?;

        let session_id = session_id
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let intent = self.classifier.classify(message).await;

        let text = if intent.has_bias {
            let rewritten = self.mitigator.rewrite(message).await;
            info!(session_id = %session_id, "Biased query rewritten");
            rewritten
        } else {
            message.to_string()
        };

        let prior = self.sessions.get(&session_id)?;
        self.sessions.append(&session_id, ChatTurn::user(text.clone()))?;

        let (jobs, mentorships, events) = tokio::join!(
            lookup(self.stores.jobs.as_ref(), intent.job_search_params.as_ref(), &session_id),
            lookup(
                self.stores.mentorships.as_ref(),
                intent.mentorship_params.as_ref(),
                &session_id
            ),
            lookup(self.stores.events.as_ref(), intent.events_params.as_ref(), &session_id),
        );

        let reply = self
            .composer
            .compose(&text, &prior, &intent)
            .await
            .map_err(|e| {
                warn!(session_id = %session_id, error = %e, "Reply composition failed");
                ChatError::Composition {
                    cause: e.to_string(),
                }
            })?;

        self.sessions
            .append(&session_id, ChatTurn::assistant(reply.clone()))?;
        let dropped = self.sessions.trim(&session_id)?;
        if dropped > 0 {
            debug!(session_id = %session_id, dropped, "Session history trimmed");
        }

        Ok(ChatResponse {
            message: reply,
            session_id,
            jobs,
            mentorships,
            events,
        })
    }

    fn validate(&self, message: &str) -> Result<(), ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if message.chars().count() > self.max_message_length {
            return Err(ChatError::MessageTooLong(self.max_message_length));
        }
        Ok(())
    }
}

/// Search one domain if the intent named it. Failures are logged and
/// leave that attachment out.
async fn lookup<Q: DomainQuery>(
    store: &dyn RecordSearch<Q>,
    params: Option<&Q>,
    session_id: &str,
) -> Option<Vec<Q::Record>> {
    let params = params?;
    match store.search(params).await {
        Ok(records) => {
            debug!(session_id, domain = Q::DOMAIN, count = records.len(), "Lookup done");
            Some(records)
        }
        Err(e) => {
            warn!(session_id, domain = Q::DOMAIN, error = %e, "Lookup failed");
            None
        }
    }
}
