//! Reply composition.
//!
//! One LLM call per message: the Asha persona as system instruction, the
//! stored history as prior turns and the current message last.

use std::sync::Arc;

use tracing::debug;

use asha_core::ChatTurn;
use asha_llm::{GenerationConfig, LlmClient, LlmError, LlmRequest};

use crate::types::IntentResult;

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 500;

/// Substituted when the model answers with an empty body.
pub const EMPTY_REPLY: &str = "I'm sorry, I couldn't generate a response at this time.";

const PERSONA: &str = "You are Asha, an AI-powered career assistant for the JobsForHer Foundation.
Your purpose is to empower women in their career journeys by providing:
- Career advice tailored for women professionals
- Job search assistance
- Information about mentorship programs
- Details about networking events and career development opportunities

Guidelines:
1. Be supportive, professional, and empowering in your language.
2. Provide specific, actionable advice rather than generic platitudes.
3. Be mindful to avoid gender bias in your responses. Don't reinforce stereotypes about \"women's jobs\" or \"men's jobs.\"
4. When discussing career fields, emphasize that all areas are open to women, including traditionally male-dominated ones.
5. Focus on practical solutions and opportunities.
6. Keep responses concise but informative.
7. If unsure about something, acknowledge the limits of your knowledge rather than making up information.

The current capabilities you have access to include:
- Job listings search
- Mentorship program information
- Career events and workshops
- General career advice";

/// Persona plus a note of which searches ran for this message.
pub fn system_prompt(intent: &IntentResult) -> String {
    let mut lines = Vec::new();
    if let Some(params) = &intent.job_search_params {
        lines.push(format!("- Job search: {}", to_json(params)));
    }
    if let Some(params) = &intent.mentorship_params {
        lines.push(format!("- Mentorship search: {}", to_json(params)));
    }
    if let Some(params) = &intent.events_params {
        lines.push(format!("- Event search: {}", to_json(params)));
    }

    if lines.is_empty() {
        PERSONA.to_string()
    } else {
        format!(
            "{}\n\nMatching results for these searches are shown to the user alongside your reply:\n{}",
            PERSONA,
            lines.join("\n")
        )
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

pub struct ResponseComposer {
    llm: Arc<dyn LlmClient>,
}

impl ResponseComposer {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Compose the reply to `message`, given the turns that preceded it.
    ///
    /// Provider errors are returned to the caller; an empty reply becomes
    /// [`EMPTY_REPLY`].
    pub async fn compose(
        &self,
        message: &str,
        history: &[ChatTurn],
        intent: &IntentResult,
    ) -> Result<String, LlmError> {
        let mut turns = Vec::with_capacity(history.len() + 1);
        turns.extend_from_slice(history);
        turns.push(ChatTurn::user(message));

        let request = LlmRequest {
            system: Some(system_prompt(intent)),
            turns,
            config: GenerationConfig::new(TEMPERATURE).with_max_tokens(MAX_TOKENS),
        };

        let text = self.llm.complete(&request).await?;
        let text = text.trim();
        if text.is_empty() {
            debug!(provider = self.llm.name(), "Model returned an empty reply");
            return Ok(EMPTY_REPLY.to_string());
        }
        Ok(text.to_string())
    }
}
