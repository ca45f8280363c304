use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AshaError, Result};

/// Top-level configuration for the Asha server.
///
/// Loaded from `~/.asha/config.toml` by default. Every section is optional
/// and falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AshaConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl AshaConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AshaConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| AshaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            log_level: "info".to_string(),
        }
    }
}

/// Which LLM backend serves classification, rewriting and replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProviderKind {
    Gemini,
    OpenAi,
}

/// LLM provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub provider: LlmProviderKind,
    pub model: String,
    /// Inline key. Left empty, the key is read from `api_key_env`.
    pub api_key: String,
    pub api_key_env: String,
    /// Empty means the provider's public endpoint.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProviderKind::Gemini,
            model: "gemini-1.5-pro".to_string(),
            api_key: String::new(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            base_url: String::new(),
            timeout_secs: 30,
        }
    }
}

impl LlmConfig {
    /// Inline key if set, otherwise the value of `api_key_env`.
    pub fn resolved_api_key(&self) -> Option<String> {
        resolve_secret(&self.api_key, &self.api_key_env)
    }
}

/// Chat pipeline limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Maximum turns kept per session, including the first-turn anchor.
    pub max_history: usize,
    /// Maximum inbound message length in characters.
    pub max_message_length: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_history: 20,
            max_message_length: 4000,
        }
    }
}

/// Record cache freshness per domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub jobs_ttl_secs: u64,
    pub mentorships_ttl_secs: u64,
    pub events_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            jobs_ttl_secs: 15 * 60,
            mentorships_ttl_secs: 60 * 60,
            events_ttl_secs: 60 * 60,
        }
    }
}

/// External data providers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub jobs: JobProviderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JobProviderConfig {
    pub enabled: bool,
    pub base_url: String,
    pub api_key: String,
    pub api_key_env: String,
}

impl Default for JobProviderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://api.indeed.com/v2/jobs".to_string(),
            api_key: String::new(),
            api_key_env: "INDEED_API_KEY".to_string(),
        }
    }
}

impl JobProviderConfig {
    pub fn resolved_api_key(&self) -> Option<String> {
        resolve_secret(&self.api_key, &self.api_key_env)
    }
}

fn resolve_secret(inline: &str, env_var: &str) -> Option<String> {
    if !inline.trim().is_empty() {
        return Some(inline.trim().to_string());
    }
    if env_var.is_empty() {
        return None;
    }
    std::env::var(env_var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = AshaConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.log_level, "info");
        assert_eq!(config.llm.provider, LlmProviderKind::Gemini);
        assert_eq!(config.llm.model, "gemini-1.5-pro");
        assert_eq!(config.chat.max_history, 20);
        assert_eq!(config.cache.jobs_ttl_secs, 900);
        assert_eq!(config.cache.mentorships_ttl_secs, 3600);
        assert_eq!(config.cache.events_ttl_secs, 3600);
        assert!(config.providers.jobs.enabled);
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[server]
host = "0.0.0.0"
port = 8080
log_level = "debug"

[llm]
provider = "openai"
model = "gpt-4o"
api_key = "sk-test"

[cache]
jobs_ttl_secs = 60

[providers.jobs]
enabled = false
"#;
        let file = create_temp_config(content);
        let config = AshaConfig::load(file.path()).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.llm.provider, LlmProviderKind::OpenAi);
        assert_eq!(config.llm.resolved_api_key().as_deref(), Some("sk-test"));
        assert_eq!(config.cache.jobs_ttl_secs, 60);
        assert_eq!(config.cache.events_ttl_secs, 3600);
        assert!(!config.providers.jobs.enabled);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let file = create_temp_config("[server]\nlog_level = \"warn\"\n");
        let config = AshaConfig::load(file.path()).unwrap();
        assert_eq!(config.server.log_level, "warn");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.chat.max_message_length, 4000);
    }

    #[test]
    fn test_load_invalid_toml_is_config_error() {
        let file = create_temp_config("[server\nport = ");
        let err = AshaConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, AshaError::Config(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = AshaConfig::load(Path::new("/nonexistent/asha.toml")).unwrap_err();
        assert!(matches!(err, AshaError::Io(_)));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AshaConfig::default();
        config.chat.max_history = 8;
        config.save(&path).unwrap();

        let reloaded = AshaConfig::load(&path).unwrap();
        assert_eq!(reloaded.chat.max_history, 8);
        assert_eq!(reloaded.llm.model, config.llm.model);
    }

    #[test]
    fn test_resolved_api_key_from_env() {
        let llm = LlmConfig {
            api_key: String::new(),
            api_key_env: "ASHA_TEST_LLM_KEY_RESOLVE".to_string(),
            ..LlmConfig::default()
        };
        std::env::set_var("ASHA_TEST_LLM_KEY_RESOLVE", "  from-env ");
        assert_eq!(llm.resolved_api_key().as_deref(), Some("from-env"));
        std::env::remove_var("ASHA_TEST_LLM_KEY_RESOLVE");
        assert!(llm.resolved_api_key().is_none());
    }

    #[test]
    fn test_blank_env_name_means_no_key() {
        let jobs = JobProviderConfig {
            api_key_env: String::new(),
            ..JobProviderConfig::default()
        };
        assert!(jobs.resolved_api_key().is_none());
    }
}
