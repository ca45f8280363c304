//! Error types for LLM providers.

/// Errors from a single generation call.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("LLM unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 429 - quota exceeded");

        let err = LlmError::Parse("missing candidates".to_string());
        assert_eq!(err.to_string(), "Parse error: missing candidates");

        let err = LlmError::Unavailable("no API key".to_string());
        assert_eq!(err.to_string(), "LLM unavailable: no API key");
    }
}
