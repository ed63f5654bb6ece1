//! Application configuration

mod app_config;

pub use app_config::{AppConfig, AssistantConfig, LlmConfig, LogFormat, LoggingConfig, ServerConfig};
