//! Generative fallback trait

use std::fmt::Debug;

use async_trait::async_trait;

/// Free-form answer generation for messages no intent matched.
///
/// Implementations absorb every failure and answer with a fixed text, so
/// the return type carries no error.
#[async_trait]
pub trait GenerativeFallback: Send + Sync + Debug {
    async fn generate(&self, user_text: &str) -> String;
}
