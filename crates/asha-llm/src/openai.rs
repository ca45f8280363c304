//! OpenAI-compatible `chat/completions` backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{LlmClient, LlmError, LlmRequest};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAiClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(
        api_key: String,
        model: String,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_key,
            model,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
        })
    }
}

#[derive(Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

fn build_request(model: &str, request: &LlmRequest) -> OpenAiRequest {
    let mut messages = Vec::with_capacity(request.turns.len() + 1);
    if let Some(system) = &request.system {
        messages.push(OpenAiMessage {
            role: "system".to_string(),
            content: Some(system.clone()),
        });
    }
    messages.extend(request.turns.iter().map(|t| OpenAiMessage {
        role: t.role.as_str().to_string(),
        content: Some(t.content.clone()),
    }));

    OpenAiRequest {
        model: model.to_string(),
        messages,
        temperature: request.config.temperature,
        max_tokens: request.config.max_output_tokens,
        response_format: request
            .config
            .json_output
            .then_some(ResponseFormat { kind: "json_object" }),
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &LlmRequest) -> Result<String, LlmError> {
        let body = build_request(&self.model, request);

        let resp = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let text = resp.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status,
                message: text,
            });
        }

        let data: OpenAiResponse = resp
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;
        Ok(data
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenerationConfig;
    use asha_core::ChatTurn;

    #[test]
    fn test_build_request_puts_system_first() {
        let request = LlmRequest {
            system: Some("persona".to_string()),
            turns: vec![ChatTurn::user("a"), ChatTurn::assistant("b")],
            config: GenerationConfig::new(0.7).with_max_tokens(500),
        };
        let body = serde_json::to_value(build_request("gpt-4o", &request)).unwrap();
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][2]["role"], "assistant");
        assert_eq!(body["max_tokens"], 500);
        assert!(body.get("response_format").is_none());
    }

    #[test]
    fn test_build_request_json_object_format() {
        let mut config = GenerationConfig::new(0.1);
        config.json_output = true;
        let body =
            serde_json::to_value(build_request("gpt-4o", &LlmRequest::prompt("x", config)))
                .unwrap();
        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_response_with_null_content() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        let resp: OpenAiResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.choices[0].message.content.is_none());
    }
}
