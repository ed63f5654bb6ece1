//! In-memory response cache with full reset at capacity

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use crate::domain::cache::{CacheEntry, CacheKey, ResponseCache};
use crate::domain::DomainError;

pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Unbounded-until-threshold response cache.
///
/// When a new key arrives and the cache already holds `max_entries`
/// entries, every entry is dropped before the insert. This is a wholesale
/// reset, not LRU eviction. There is no time-based expiry.
#[derive(Debug)]
pub struct InMemoryResponseCache {
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
    max_entries: usize,
}

impl InMemoryResponseCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            max_entries,
        }
    }
}

impl Default for InMemoryResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

impl ResponseCache for InMemoryResponseCache {
    fn get(&self, key: &CacheKey) -> Result<Option<CacheEntry>, DomainError> {
        let entries = self.entries.read().map_err(|e| {
            DomainError::cache(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: CacheKey, entry: CacheEntry) -> Result<(), DomainError> {
        let mut entries = self.entries.write().map_err(|e| {
            DomainError::cache(format!("Failed to acquire write lock: {}", e))
        })?;

        if !entries.contains_key(&key) && entries.len() >= self.max_entries {
            debug!(
                entries = entries.len(),
                max_entries = self.max_entries,
                "Response cache full, clearing"
            );
            entries.clear();
        }

        entries.insert(key, entry);
        Ok(())
    }

    fn clear(&self) -> Result<(), DomainError> {
        self.entries
            .write()
            .map_err(|e| DomainError::cache(format!("Failed to acquire write lock: {}", e)))?
            .clear();
        Ok(())
    }

    fn len(&self) -> Result<usize, DomainError> {
        let entries = self.entries.read().map_err(|e| {
            DomainError::cache(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intent::UserQuery;
    use crate::domain::student::StudentId;

    fn key(student: &str, message: &str) -> CacheKey {
        CacheKey::new(StudentId::new(student), &UserQuery::new(message))
    }

    #[test]
    fn test_put_and_get() {
        let cache = InMemoryResponseCache::default();

        cache.put(key("s1", "fee"), CacheEntry::text("KES 0")).unwrap();

        let entry = cache.get(&key("s1", "fee")).unwrap().unwrap();
        assert_eq!(entry.text, "KES 0");
        assert!(entry.audio.is_none());
    }

    #[test]
    fn test_get_missing() {
        let cache = InMemoryResponseCache::default();
        assert!(cache.get(&key("s1", "fee")).unwrap().is_none());
    }

    #[test]
    fn test_entries_are_scoped_per_student() {
        let cache = InMemoryResponseCache::default();

        cache.put(key("s1", "fee"), CacheEntry::text("one")).unwrap();
        cache.put(key("s2", "fee"), CacheEntry::text("two")).unwrap();

        assert_eq!(cache.get(&key("s1", "fee")).unwrap().unwrap().text, "one");
        assert_eq!(cache.get(&key("s2", "fee")).unwrap().unwrap().text, "two");
        assert_eq!(cache.len().unwrap(), 2);
    }

    #[test]
    fn test_fills_to_capacity_without_clearing() {
        let cache = InMemoryResponseCache::new(100);

        for i in 0..100 {
            cache
                .put(key("s1", &format!("q{}", i)), CacheEntry::text(i.to_string()))
                .unwrap();
        }

        assert_eq!(cache.len().unwrap(), 100);
        assert!(cache.get(&key("s1", "q0")).unwrap().is_some());
    }

    #[test]
    fn test_new_key_past_capacity_clears_everything() {
        let cache = InMemoryResponseCache::new(100);

        for i in 0..100 {
            cache
                .put(key("s1", &format!("q{}", i)), CacheEntry::text(i.to_string()))
                .unwrap();
        }
        cache.put(key("s1", "q100"), CacheEntry::text("100")).unwrap();

        assert_eq!(cache.len().unwrap(), 1);
        assert!(cache.get(&key("s1", "q0")).unwrap().is_none());
        assert!(cache.get(&key("s1", "q99")).unwrap().is_none());
        assert_eq!(cache.get(&key("s1", "q100")).unwrap().unwrap().text, "100");
    }

    #[test]
    fn test_overwriting_existing_key_at_capacity_keeps_entries() {
        let cache = InMemoryResponseCache::new(3);

        cache.put(key("s1", "a"), CacheEntry::text("a")).unwrap();
        cache.put(key("s1", "b"), CacheEntry::text("b")).unwrap();
        cache.put(key("s1", "c"), CacheEntry::text("c")).unwrap();
        cache.put(key("s1", "b"), CacheEntry::text("b2")).unwrap();

        assert_eq!(cache.len().unwrap(), 3);
        assert_eq!(cache.get(&key("s1", "b")).unwrap().unwrap().text, "b2");
    }

    #[test]
    fn test_clear() {
        let cache = InMemoryResponseCache::default();
        cache.put(key("s1", "a"), CacheEntry::text("a")).unwrap();

        cache.clear().unwrap();

        assert!(cache.is_empty().unwrap());
    }

    #[test]
    fn test_concurrent_puts_never_exceed_capacity() {
        let cache = std::sync::Arc::new(InMemoryResponseCache::new(10));

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let cache = cache.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        cache
                            .put(key(&format!("s{}", t), &format!("q{}", i)), CacheEntry::text("x"))
                            .unwrap();
                        assert!(cache.len().unwrap() <= 10);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.len().unwrap() <= 10);
    }
}
