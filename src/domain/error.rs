use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Directory error: {message}")]
    Directory { message: String },

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("Template error: {0}")]
    Template(#[from] crate::domain::response::TemplateError),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn directory(message: impl Into<String>) -> Self {
        Self::Directory {
            message: message.into(),
        }
    }

    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::response::TemplateError;

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Empty message");
        assert_eq!(error.to_string(), "Validation error: Empty message");
    }

    #[test]
    fn test_provider_error() {
        let error = DomainError::provider("openai", "HTTP 401");
        assert_eq!(error.to_string(), "Provider error: openai - HTTP 401");
    }

    #[test]
    fn test_template_error_conversion() {
        let error: DomainError = TemplateError::MissingVariable {
            name: "balance".to_string(),
        }
        .into();

        assert_eq!(
            error.to_string(),
            "Template error: Missing required variable: balance"
        );
    }
}
