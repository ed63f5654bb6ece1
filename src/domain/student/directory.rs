//! User directory trait

use async_trait::async_trait;

use super::entity::{StudentId, StudentProfile};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Read-only lookup of student profiles.
///
/// Unknown ids are not an error: implementations return
/// `StudentProfile::new(id)` so the pipeline degrades to default values.
/// An `Err` is reserved for backend failures.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn lookup(&self, id: &StudentId) -> Result<StudentProfile, DomainError>;
}
