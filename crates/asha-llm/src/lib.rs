//! LLM capability used by the chat pipeline.
//!
//! The pipeline only ever sees [`LlmClient`]: one request in, one text out.
//! Concrete backends (Gemini, OpenAI-compatible) and the scripted
//! [`MockLlm`] live behind it, so providers can be swapped from config
//! without touching classification, rewriting or composition.

pub mod error;
pub mod gemini;
pub mod mock;
pub mod openai;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use asha_core::config::{LlmConfig, LlmProviderKind};
use asha_core::ChatTurn;

pub use error::LlmError;
pub use gemini::GeminiClient;
pub use mock::{MockLlm, MockReply};
pub use openai::OpenAiClient;

/// Sampling settings for one call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: Option<u32>,
    /// Ask the provider for a JSON object instead of prose.
    pub json_output: bool,
}

impl GenerationConfig {
    pub fn new(temperature: f32) -> Self {
        Self {
            temperature,
            max_output_tokens: None,
            json_output: false,
        }
    }

    pub fn with_max_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }
}

/// A provider-neutral generation request.
///
/// `turns` are ordered oldest first; the last one is what the model answers.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmRequest {
    pub system: Option<String>,
    pub turns: Vec<ChatTurn>,
    pub config: GenerationConfig,
}

impl LlmRequest {
    /// Single user prompt, no system instruction.
    pub fn prompt(prompt: impl Into<String>, config: GenerationConfig) -> Self {
        Self {
            system: None,
            turns: vec![ChatTurn::user(prompt)],
            config,
        }
    }

    /// Text of the final turn.
    pub fn last_text(&self) -> &str {
        self.turns.last().map(|t| t.content.as_str()).unwrap_or("")
    }
}

/// Text generation capability.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &str;

    /// Issue one generation call and return the raw text.
    async fn complete(&self, request: &LlmRequest) -> Result<String, LlmError>;

    /// Free-text generation from a single prompt.
    async fn generate(&self, prompt: &str, config: GenerationConfig) -> Result<String, LlmError> {
        self.complete(&LlmRequest::prompt(prompt, config)).await
    }

    /// JSON-shaped generation from a single prompt. The returned text is
    /// still unparsed; callers must tolerate fences and malformed output.
    async fn generate_structured(
        &self,
        prompt: &str,
        config: GenerationConfig,
    ) -> Result<String, LlmError> {
        let config = GenerationConfig {
            json_output: true,
            ..config
        };
        self.complete(&LlmRequest::prompt(prompt, config)).await
    }
}

/// Build the configured backend.
///
/// Without an API key the server still starts, backed by
/// [`MockLlm::unavailable`]: every call fails and the pipeline degrades.
pub fn build_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    let Some(api_key) = config.resolved_api_key() else {
        tracing::warn!(
            env = %config.api_key_env,
            "No LLM API key configured; chat replies will fail until one is set"
        );
        return Ok(Arc::new(MockLlm::unavailable()));
    };

    let timeout = Duration::from_secs(config.timeout_secs.max(1));
    let base_url = (!config.base_url.trim().is_empty()).then(|| config.base_url.clone());

    let client: Arc<dyn LlmClient> = match config.provider {
        LlmProviderKind::Gemini => Arc::new(GeminiClient::new(
            api_key,
            config.model.clone(),
            base_url,
            timeout,
        )?),
        LlmProviderKind::OpenAi => Arc::new(OpenAiClient::new(
            api_key,
            config.model.clone(),
            base_url,
            timeout,
        )?),
    };
    tracing::info!(provider = client.name(), model = %config.model, "LLM client ready");
    Ok(client)
}
