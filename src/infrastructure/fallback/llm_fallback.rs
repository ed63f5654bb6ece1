//! Generative fallback backed by an LLM provider

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::LlmConfig;
use crate::domain::response::GenerativeFallback;
use crate::domain::{DomainError, LlmProvider, LlmRequest};

/// Text returned whenever generation fails
pub const FALLBACK_TEXT: &str =
    "I'm here to help with university matters. What would you like to know?";

/// Settings for a single completion call
#[derive(Debug, Clone)]
pub struct FallbackSettings {
    pub model: String,
    pub system_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
}

impl From<&LlmConfig> for FallbackSettings {
    fn from(config: &LlmConfig) -> Self {
        Self {
            model: config.model.clone(),
            system_prompt: config.system_prompt.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            timeout: config.timeout(),
        }
    }
}

impl Default for FallbackSettings {
    fn default() -> Self {
        Self::from(&LlmConfig::default())
    }
}

/// One attempt at the provider under a hard timeout; every failure turns
/// into [`FALLBACK_TEXT`] at this boundary.
#[derive(Debug)]
pub struct LlmFallback {
    provider: Option<Arc<dyn LlmProvider>>,
    settings: FallbackSettings,
}

impl LlmFallback {
    pub fn new(provider: Option<Arc<dyn LlmProvider>>, settings: FallbackSettings) -> Self {
        Self { provider, settings }
    }

    /// Fallback that never calls out and always answers with the fixed text
    pub fn disabled() -> Self {
        Self::new(None, FallbackSettings::default())
    }

    async fn try_generate(&self, user_text: &str) -> Result<String, DomainError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| DomainError::configuration("No LLM provider configured"))?;

        let request = LlmRequest::builder()
            .system(&self.settings.system_prompt)
            .user(user_text)
            .max_tokens(self.settings.max_tokens)
            .temperature(self.settings.temperature)
            .build();

        let response = tokio::time::timeout(
            self.settings.timeout,
            provider.chat(&self.settings.model, request),
        )
        .await
        .map_err(|_| {
            DomainError::provider(
                provider.provider_name(),
                format!("Timed out after {:?}", self.settings.timeout),
            )
        })??;

        Ok(response.content().trim().to_string())
    }
}

#[async_trait]
impl GenerativeFallback for LlmFallback {
    async fn generate(&self, user_text: &str) -> String {
        match self.try_generate(user_text).await {
            Ok(text) => {
                debug!(chars = text.len(), "Generated fallback answer");
                text
            }
            Err(e) => {
                warn!(error = %e, "Generative fallback failed, using fixed reply");
                FALLBACK_TEXT.to_string()
            }
        }
    }
}
