use std::sync::Arc;

use tracing::warn;

use super::http_client::HttpClient;
use super::OpenAiProvider;
use crate::config::LlmConfig;
use crate::domain::{DomainError, LlmProvider};

/// Factory for creating LLM providers
#[derive(Debug)]
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create the OpenAI-compatible provider described by `config`.
    ///
    /// Returns `Ok(None)` when no API key is available; the generative
    /// fallback then answers with its fixed text.
    pub fn create(config: &LlmConfig) -> Result<Option<Arc<dyn LlmProvider>>, DomainError> {
        let Some(api_key) = config.resolve_api_key() else {
            warn!("No LLM API key configured, generative fallback disabled");
            return Ok(None);
        };

        let http_client = HttpClient::with_timeout(config.timeout())?;
        let provider = OpenAiProvider::with_base_url(http_client, api_key, &config.base_url);

        Ok(Some(Arc::new(provider)))
    }
}
