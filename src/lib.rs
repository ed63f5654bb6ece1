//! Campus Helpdesk
//!
//! A chat assistant for university students:
//! - Keyword intent classification
//! - Templated answers about results, fees and unit registration
//! - LLM-generated answers for everything else
//! - Per-student response caching

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::ResponseResolver;
use infrastructure::{
    assistant::AssistantService,
    cache::InMemoryResponseCache,
    fallback::{FallbackSettings, LlmFallback},
    llm::LlmProviderFactory,
    student::InMemoryUserDirectory,
};

/// Wire the chat pipeline from configuration
pub fn build_assistant(config: &AppConfig) -> anyhow::Result<AssistantService> {
    let directory = Arc::new(InMemoryUserDirectory::with_demo_data());
    let cache = Arc::new(InMemoryResponseCache::new(config.assistant.cache_max_entries));

    let provider = LlmProviderFactory::create(&config.llm)?;
    let fallback = Arc::new(LlmFallback::new(
        provider,
        FallbackSettings::from(&config.llm),
    ));

    Ok(AssistantService::new(
        directory,
        cache,
        ResponseResolver::new(fallback),
    ))
}

/// Create application state from configuration
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let assistant = build_assistant(config)?;

    Ok(AppState::new(
        Arc::new(assistant),
        config.assistant.default_user_id.as_str(),
    ))
}
