//! Intent classification: one structured LLM call per message.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::{debug, warn};

use asha_llm::{GenerationConfig, LlmClient};

use crate::types::IntentResult;

const TEMPERATURE: f32 = 0.1;

static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json|JSON)?\s*(.*?)\s*```").expect("Invalid fence regex")
});

const INSTRUCTIONS: &str = r#"Analyze the following job or career-related query and extract relevant parameters.
If it's a job search query, identify:
- Job role/title
- Location preferences
- Work arrangement preferences (remote, hybrid, on-site)
- Job type preferences (full-time, part-time, contract)
- Technology stack or skills mentioned
- Experience level
- Any salary expectations

If it's about mentorship programs, identify:
- Status preferences (open, upcoming)
- Duration preferences
- Field or industry focus

If it's about events, identify:
- Type of event
- Date preferences
- Location preferences

Also, determine if the query contains any gender bias (e.g., assuming certain roles are only for men or women).

Respond with JSON in this exact format:
{
  "jobSearchParams": {
    "query": "extracted job search term",
    "location": "location if mentioned",
    "workArrangement": "Remote/Hybrid/On-site if mentioned",
    "jobType": "Full-time/Part-time/Contract if mentioned",
    "techStack": ["tech1", "tech2"],
    "experienceLevel": "junior/mid/senior if mentioned",
    "salaryMin": number or null,
    "salaryMax": number or null
  },
  "mentorshipParams": {
    "status": "Applications Open/Coming Soon if mentioned",
    "duration": "duration if mentioned",
    "field": "field if mentioned"
  },
  "eventsParams": {
    "type": "type if mentioned",
    "date": "date if mentioned",
    "location": "location if mentioned"
  },
  "hasBias": true/false
}

Only include params that are actually present in the query, leave others as null if not relevant."#;

/// Build the classification prompt for `message`.
pub fn build_prompt(message: &str) -> String {
    format!("{}\nQuery: \"{}\"", INSTRUCTIONS, message)
}

/// Pull the JSON body out of a model reply.
///
/// Handles fenced code blocks and prose around a bare object.
pub fn extract_json(text: &str) -> &str {
    if let Some(inner) = FENCE.captures(text).and_then(|c| c.get(1)) {
        return inner.as_str();
    }
    let trimmed = text.trim();
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if end > start => &trimmed[start..=end],
        _ => trimmed,
    }
}

/// Parse a model reply into an intent. `None` when it is not valid JSON
/// of the expected shape.
pub fn parse_intent(text: &str) -> Option<IntentResult> {
    serde_json::from_str::<IntentResult>(extract_json(text))
        .ok()
        .map(IntentResult::normalized)
}

pub struct IntentClassifier {
    llm: Arc<dyn LlmClient>,
}

impl IntentClassifier {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Never fails: provider errors and unparseable output both yield
    /// [`IntentResult::neutral`].
    pub async fn classify(&self, message: &str) -> IntentResult {
        let text = match self
            .llm
            .generate_structured(&build_prompt(message), GenerationConfig::new(TEMPERATURE))
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!(provider = self.llm.name(), error = %e, "Intent classification failed");
                return IntentResult::neutral();
            }
        };

        match parse_intent(&text) {
            Some(intent) => {
                debug!(
                    jobs = intent.job_search_params.is_some(),
                    mentorships = intent.mentorship_params.is_some(),
                    events = intent.events_params.is_some(),
                    has_bias = intent.has_bias,
                    "Intent classified"
                );
                intent
            }
            None => {
                warn!(raw = %text, "Could not parse intent JSON from model reply");
                IntentResult::neutral()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asha_llm::{MockLlm, MockReply};

    fn classifier(replies: Vec<MockReply>) -> (IntentClassifier, Arc<MockLlm>) {
        let mock = Arc::new(MockLlm::scripted(replies));
        (IntentClassifier::new(mock.clone()), mock)
    }

    #[test]
    fn test_extract_json_from_fence() {
        let text = "Here you go:\n```json\n{\"hasBias\": true}\n```\nDone.";
        assert_eq!(extract_json(text), "{\"hasBias\": true}");
    }

    #[test]
    fn test_extract_json_from_untagged_fence() {
        assert_eq!(extract_json("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_extract_json_from_prose() {
        assert_eq!(extract_json("Sure! {\"a\":1} hope that helps"), "{\"a\":1}");
        assert_eq!(extract_json("  no json  "), "no json");
    }

    #[test]
    fn test_prompt_embeds_query() {
        let prompt = build_prompt("remote rust jobs");
        assert!(prompt.ends_with("Query: \"remote rust jobs\""));
        assert!(prompt.contains("\"hasBias\""));
    }

    #[test]
    fn test_loose_bias_flag_keeps_params() {
        for bias in ["null", "\"false\"", "\"maybe\""] {
            let raw = format!(
                r#"{{"jobSearchParams":{{"location":"Mumbai"}},"hasBias":{}}}"#,
                bias
            );
            let intent = parse_intent(&raw).unwrap();
            assert_eq!(
                intent.job_search_params.unwrap().location.as_deref(),
                Some("Mumbai")
            );
            assert!(!intent.has_bias);
        }
        assert!(parse_intent(r#"{"hasBias":"true"}"#).unwrap().has_bias);
    }

    #[tokio::test]
    async fn test_classify_fenced_reply() {
        let (classifier, mock) = classifier(vec![MockReply::text(
            "```json\n{\"jobSearchParams\":{\"location\":\"Mumbai\"},\"hasBias\":false}\n```",
        )]);
        let intent = classifier.classify("jobs in Mumbai").await;

        assert_eq!(
            intent.job_search_params.unwrap().location.as_deref(),
            Some("Mumbai")
        );
        let requests = mock.requests();
        assert!(requests[0].config.json_output);
        assert_eq!(requests[0].config.temperature, TEMPERATURE);
        assert!(requests[0].last_text().contains("jobs in Mumbai"));
    }

    #[tokio::test]
    async fn test_malformed_reply_is_neutral() {
        let (classifier, _) = classifier(vec![MockReply::text("I think they want jobs!")]);
        assert_eq!(classifier.classify("Show me remote jobs").await, IntentResult::neutral());
    }

    #[tokio::test]
    async fn test_provider_failure_is_neutral() {
        let (classifier, _) = classifier(vec![MockReply::fail("timeout")]);
        assert_eq!(classifier.classify("anything").await, IntentResult::neutral());
    }

    #[tokio::test]
    async fn test_bias_flag_read() {
        let (classifier, _) = classifier(vec![MockReply::text(r#"{"hasBias":true}"#)]);
        let intent = classifier.classify("jobs for women like nursing").await;
        assert!(intent.has_bias);
        assert!(!intent.has_lookups());
    }
}
