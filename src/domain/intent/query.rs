//! User query with its normalized form

/// A message as typed by the student together with the form used for
/// matching and cache lookups (trimmed and lowercased)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery {
    raw: String,
    normalized: String,
}

impl UserQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);

        Self { raw, normalized }
    }

    /// Original text, forwarded untouched to the generative fallback
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_keeps_raw_text() {
        let query = UserQuery::new("  What's My FEE?  ");
        assert_eq!(query.raw(), "  What's My FEE?  ");
        assert_eq!(query.normalized(), "what's my fee?");
    }
}
