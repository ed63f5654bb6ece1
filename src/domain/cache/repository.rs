//! Response cache trait definition

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use super::key::CacheKey;
use crate::domain::DomainError;

/// A resolved chat reply.
///
/// `audio` is a placeholder for spoken replies and is always `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub text: String,
    pub audio: Option<String>,
}

impl CacheEntry {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            audio: None,
        }
    }
}

/// Memoizes resolved replies per (student, normalized message).
///
/// Implementations are shared across concurrent requests and must keep
/// their size bookkeeping and insertion atomic with respect to each other.
pub trait ResponseCache: Send + Sync + Debug {
    fn get(&self, key: &CacheKey) -> Result<Option<CacheEntry>, DomainError>;

    fn put(&self, key: CacheKey, entry: CacheEntry) -> Result<(), DomainError>;

    /// Removes every entry
    fn clear(&self) -> Result<(), DomainError>;

    fn len(&self) -> Result<usize, DomainError>;

    fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.len()? == 0)
    }
}
