//! Generative fallback implementations

mod llm_fallback;

pub use llm_fallback::{FallbackSettings, LlmFallback, FALLBACK_TEXT};
