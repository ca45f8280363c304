//! Best-effort rewrite of gender-biased queries.

use std::sync::Arc;

use tracing::{debug, warn};

use asha_llm::{GenerationConfig, LlmClient};

const TEMPERATURE: f32 = 0.3;
const MAX_TOKENS: u32 = 100;

pub fn build_prompt(query: &str) -> String {
    format!(
        "The following query may contain gender bias or gender stereotypes.\n\
         Please rewrite it to be gender-neutral and inclusive, while preserving the core information need.\n\
         If it's asking about jobs that are stereotypically associated with a particular gender,\n\
         rewrite it to be about the profession without gender assumptions.\n\n\
         Original query: \"{}\"\n\n\
         Rewritten query:",
        query
    )
}

pub struct BiasMitigator {
    llm: Arc<dyn LlmClient>,
}

impl BiasMitigator {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Rewrite `query` in neutral terms, or return it unchanged when the
    /// provider fails or answers with nothing.
    pub async fn rewrite(&self, query: &str) -> String {
        let config = GenerationConfig::new(TEMPERATURE).with_max_tokens(MAX_TOKENS);
        match self.llm.generate(&build_prompt(query), config).await {
            Ok(text) => {
                let rewritten = text.trim().trim_matches('"').trim();
                if rewritten.is_empty() {
                    debug!("Bias rewrite came back empty; keeping original query");
                    query.to_string()
                } else {
                    rewritten.to_string()
                }
            }
            Err(e) => {
                warn!(provider = self.llm.name(), error = %e, "Bias rewrite failed; keeping original query");
                query.to_string()
            }
        }
    }
}
