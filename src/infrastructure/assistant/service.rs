//! Chat pipeline: cache check, classification, resolution, cache store

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::domain::cache::{CacheEntry, CacheKey, ResponseCache};
use crate::domain::intent::{classify, UserQuery};
use crate::domain::response::ResponseResolver;
use crate::domain::student::{StudentId, UserDirectory};
use crate::domain::DomainError;

/// Answers student messages.
///
/// The cache is only touched before and after resolution, so no cache
/// lock is held while the generative fallback is waiting on the network.
#[derive(Clone)]
pub struct AssistantService {
    directory: Arc<dyn UserDirectory>,
    cache: Arc<dyn ResponseCache>,
    resolver: ResponseResolver,
}

impl std::fmt::Debug for AssistantService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantService")
            .field("cache", &self.cache)
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

impl AssistantService {
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        cache: Arc<dyn ResponseCache>,
        resolver: ResponseResolver,
    ) -> Self {
        Self {
            directory,
            cache,
            resolver,
        }
    }

    /// Resolve a message for a student, serving repeats from the cache
    pub async fn process_query(
        &self,
        student_id: &StudentId,
        message: &str,
    ) -> Result<CacheEntry, DomainError> {
        let start = Instant::now();
        let query = UserQuery::new(message);
        let key = CacheKey::new(student_id.clone(), &query);

        if let Some(entry) = self.cache.get(&key)? {
            debug!(cache_key = %key, "Response cache hit");
            return Ok(entry);
        }

        let profile = self.directory.lookup(student_id).await?;
        let intent = classify(query.normalized());
        let text = self.resolver.resolve(intent, &query, &profile).await?;

        let entry = CacheEntry::text(text);
        self.cache.put(key, entry.clone())?;

        info!(
            student_id = %student_id,
            intent = %intent,
            duration_ms = start.elapsed().as_millis() as u64,
            "Query processed"
        );

        Ok(entry)
    }
}
