//! Scripted LLM client for tests and keyless development runs.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{LlmClient, LlmError, LlmRequest};

/// One scripted outcome.
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    Fail(String),
}

impl MockReply {
    pub fn text(text: impl Into<String>) -> Self {
        MockReply::Text(text.into())
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        MockReply::Fail(reason.into())
    }
}

/// Replays scripted replies in call order and records every request.
///
/// Once the script is exhausted every call fails with
/// [`LlmError::Unavailable`].
pub struct MockLlm {
    name: &'static str,
    script: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<LlmRequest>>,
}

impl MockLlm {
    pub fn scripted(replies: Vec<MockReply>) -> Self {
        Self {
            name: "mock",
            script: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A client whose every call fails.
    pub fn unavailable() -> Self {
        Self {
            name: "unavailable",
            ..Self::scripted(Vec::new())
        }
    }

    /// Append a reply to the end of the script.
    pub fn push(&self, reply: MockReply) {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(reply);
        }
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<LlmRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    fn name(&self) -> &str {
        self.name
    }

    async fn complete(&self, request: &LlmRequest) -> Result<String, LlmError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        let next = self
            .script
            .lock()
            .map_err(|e| LlmError::Unavailable(format!("mock script lock poisoned: {}", e)))?
            .pop_front();

        match next {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::Fail(reason)) => Err(LlmError::Unavailable(reason)),
            None => Err(LlmError::Unavailable("no LLM provider configured".to_string())),
        }
    }
}
