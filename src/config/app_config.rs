use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub assistant: AssistantConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Chat pipeline settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Student the chat endpoint answers for
    pub default_user_id: String,
    /// Entry count at which the response cache is reset
    pub cache_max_entries: usize,
}

/// Generative fallback settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    /// Falls back to the OPENAI_API_KEY environment variable when unset
    pub api_key: Option<String>,
    pub system_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            default_user_id: "student123".to_string(),
            cache_max_entries: 100,
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            api_key: None,
            system_prompt: "You are a helpful university assistant. Be concise and direct."
                .to_string(),
            max_tokens: 100,
            temperature: 0.7,
            timeout_secs: 10,
        }
    }
}

impl LlmConfig {
    /// Configured key, else OPENAI_API_KEY; blank values count as unset
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(std::env::var("OPENAI_API_KEY").ok())
    }

    fn resolve_api_key_with(&self, env_key: Option<String>) -> Option<String> {
        let non_blank = |key: &String| !key.trim().is_empty();

        self.api_key
            .clone()
            .filter(non_blank)
            .or_else(|| env_key.filter(non_blank))
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.assistant.default_user_id, "student123");
        assert_eq!(config.assistant.cache_max_entries, 100);
        assert_eq!(config.llm.model, "gpt-3.5-turbo");
        assert_eq!(config.llm.max_tokens, 100);
        assert_eq!(config.llm.timeout(), std::time::Duration::from_secs(10));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = config::Config::builder()
            .set_override("server.port", 8080)
            .unwrap()
            .set_override("llm.model", "gpt-4o-mini")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.temperature, 0.7);
        assert_eq!(config.assistant.cache_max_entries, 100);
    }

    #[test]
    fn test_explicit_api_key_wins() {
        let llm = LlmConfig {
            api_key: Some("sk-config".to_string()),
            ..LlmConfig::default()
        };

        assert_eq!(llm.resolve_api_key(), Some("sk-config".to_string()));
    }

    #[test]
    fn test_blank_api_key_is_unset() {
        let llm = LlmConfig {
            api_key: Some("  ".to_string()),
            ..LlmConfig::default()
        };

        assert_eq!(llm.resolve_api_key_with(None), None);
        assert_eq!(llm.resolve_api_key_with(Some(String::new())), None);
    }

    #[test]
    fn test_blank_api_key_falls_back_to_env() {
        let llm = LlmConfig {
            api_key: Some(String::new()),
            ..LlmConfig::default()
        };

        assert_eq!(
            llm.resolve_api_key_with(Some("sk-env".to_string())),
            Some("sk-env".to_string())
        );
    }

    #[test]
    fn test_configured_key_wins_over_env() {
        let llm = LlmConfig {
            api_key: Some("sk-config".to_string()),
            ..LlmConfig::default()
        };

        assert_eq!(
            llm.resolve_api_key_with(Some("sk-env".to_string())),
            Some("sk-config".to_string())
        );
    }
}
