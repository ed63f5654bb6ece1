//! Query cache key

use crate::domain::intent::UserQuery;
use crate::domain::student::StudentId;

/// Cache key scoping a normalized message to one student.
///
/// Two students asking the same question get independent entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    student_id: StudentId,
    message: String,
}

impl CacheKey {
    pub fn new(student_id: StudentId, query: &UserQuery) -> Self {
        Self {
            student_id,
            message: query.normalized().to_string(),
        }
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.student_id, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_normalizes_message() {
        let a = CacheKey::new(StudentId::new("s1"), &UserQuery::new("  My FEE "));
        let b = CacheKey::new(StudentId::new("s1"), &UserQuery::new("my fee"));

        assert_eq!(a, b);
        assert_eq!(a.to_string(), "s1:my fee");
    }

    #[test]
    fn test_key_is_scoped_per_student() {
        let a = CacheKey::new(StudentId::new("s1"), &UserQuery::new("my fee"));
        let b = CacheKey::new(StudentId::new("s2"), &UserQuery::new("my fee"));

        assert_ne!(a, b);
    }
}
