//! Response template parsing and rendering
//!
//! Templates use `{name}` placeholders. Every placeholder is required; the
//! resolver supplies values taken from the student profile.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Regex to match placeholders: {name}
static PLACEHOLDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([a-z][a-z_]*)\}").unwrap());

/// Template processing errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TemplateError {
    #[error("Missing required variable: {name}")]
    MissingVariable { name: String },

    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },
}

/// Names of the canned responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    Greeting,
    ResultsHeader,
    ResultsGpa,
    ResultsUnavailable,
    ResultsHelp,
    FeeBalance,
    RegistrationEligible,
    RegistrationNotEligible,
    ReportingHelp,
    UnitsHelp,
}

impl TemplateName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::ResultsHeader => "results_header",
            Self::ResultsGpa => "results_gpa",
            Self::ResultsUnavailable => "results_current_unavailable",
            Self::ResultsHelp => "results_help",
            Self::FeeBalance => "fee_balance",
            Self::RegistrationEligible => "registration_eligible",
            Self::RegistrationNotEligible => "registration_not_eligible",
            Self::ReportingHelp => "reporting_help",
            Self::UnitsHelp => "units_help",
        }
    }

    fn default_content(&self) -> &'static str {
        match self {
            Self::Greeting => {
                "👋 Hello {name}! I'm MachaAI, your university assistant. I can help you with results, fees, registration, and reporting. What would you like to do today?"
            }
            Self::ResultsHeader => "📊 Your {semester} results:",
            Self::ResultsGpa => "Overall GPA: {gpa}",
            Self::ResultsUnavailable => "📊 Your {semester} results are not available yet.",
            Self::ResultsHelp => {
                "I can help you check your results. Say 'current results' or 'previous results'."
            }
            Self::FeeBalance => {
                "💰 Your current fee balance is KES {balance}. Would you like a detailed statement?"
            }
            Self::RegistrationEligible => {
                "✅ You are eligible to register units. Your fee balance meets the requirement."
            }
            Self::RegistrationNotEligible => {
                "❌ You cannot register units yet. Your balance is KES {balance}, but you need below KES 5,000."
            }
            Self::ReportingHelp => {
                "✅ I can help you report for the semester or academic year. Please confirm if you want to proceed."
            }
            Self::UnitsHelp => {
                "📚 I can show you your registered units or help you register new ones."
            }
        }
    }

    const ALL: [TemplateName; 10] = [
        Self::Greeting,
        Self::ResultsHeader,
        Self::ResultsGpa,
        Self::ResultsUnavailable,
        Self::ResultsHelp,
        Self::FeeBalance,
        Self::RegistrationEligible,
        Self::RegistrationNotEligible,
        Self::ReportingHelp,
        Self::UnitsHelp,
    ];
}

/// A parsed response template
#[derive(Debug, Clone)]
pub struct ResponseTemplate {
    content: String,
    variables: Vec<String>,
}

impl ResponseTemplate {
    /// Parse a template string and extract its placeholders
    pub fn parse(content: impl Into<String>) -> Self {
        let content = content.into();
        let mut seen = HashSet::new();
        let variables = PLACEHOLDER_PATTERN
            .captures_iter(&content)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .filter(|name| seen.insert(name.clone()))
            .collect();

        Self { content, variables }
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Render the template with provided values
    pub fn render(&self, values: &HashMap<&str, String>) -> Result<String, TemplateError> {
        if let Some(missing) = self
            .variables
            .iter()
            .find(|name| !values.contains_key(name.as_str()))
        {
            return Err(TemplateError::MissingVariable {
                name: missing.clone(),
            });
        }

        let rendered = PLACEHOLDER_PATTERN.replace_all(&self.content, |cap: &regex::Captures| {
            values
                .get(&cap[1])
                .cloned()
                .unwrap_or_default()
        });

        Ok(rendered.into_owned())
    }
}

/// Registry of canned responses keyed by name
#[derive(Debug, Clone)]
pub struct ResponseTemplates {
    templates: HashMap<TemplateName, ResponseTemplate>,
}

impl Default for ResponseTemplates {
    fn default() -> Self {
        let templates = TemplateName::ALL
            .into_iter()
            .map(|name| (name, ResponseTemplate::parse(name.default_content())))
            .collect();

        Self { templates }
    }
}

impl ResponseTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content of a single template
    pub fn with_template(mut self, name: TemplateName, content: impl Into<String>) -> Self {
        self.templates.insert(name, ResponseTemplate::parse(content));
        self
    }

    pub fn get(&self, name: TemplateName) -> Result<&ResponseTemplate, TemplateError> {
        self.templates
            .get(&name)
            .ok_or_else(|| TemplateError::UnknownTemplate {
                name: name.as_str().to_string(),
            })
    }

    pub fn render(
        &self,
        name: TemplateName,
        values: &HashMap<&str, String>,
    ) -> Result<String, TemplateError> {
        self.get(name)?.render(values)
    }

    /// Render a template that takes no placeholders
    pub fn text(&self, name: TemplateName) -> Result<String, TemplateError> {
        self.render(name, &HashMap::new())
    }
}

/// Format an amount with comma thousands separators (12500 -> "12,500")
pub fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a GPA keeping at least one decimal place (3.0 -> "3.0", 3.25 -> "3.25")
pub fn format_gpa(gpa: f64) -> String {
    if gpa.fract() == 0.0 {
        format!("{:.1}", gpa)
    } else {
        gpa.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_variables() {
        let template = ResponseTemplate::parse("Hello, world!");
        assert!(template.variables().is_empty());
    }

    #[test]
    fn test_parse_duplicate_variables() {
        let template = ResponseTemplate::parse("{name} and {name} again");
        assert_eq!(template.variables(), &["name".to_string()]);
    }

    #[test]
    fn test_render_variables() {
        let template = ResponseTemplate::parse("Hello, {name}! Balance: {balance}");
        let values = HashMap::from([
            ("name", "Alice".to_string()),
            ("balance", "1,000".to_string()),
        ]);

        let result = template.render(&values).unwrap();
        assert_eq!(result, "Hello, Alice! Balance: 1,000");
    }

    #[test]
    fn test_render_missing_variable() {
        let template = ResponseTemplate::parse("Hello, {name}!");
        let result = template.render(&HashMap::new());

        match result {
            Err(TemplateError::MissingVariable { name }) => assert_eq!(name, "name"),
            _ => panic!("Expected MissingVariable error"),
        }
    }

    #[test]
    fn test_default_registry_has_every_template() {
        let templates = ResponseTemplates::default();

        for name in TemplateName::ALL {
            assert!(templates.get(name).is_ok(), "missing {}", name.as_str());
        }
    }

    #[test]
    fn test_override_template() {
        let templates =
            ResponseTemplates::new().with_template(TemplateName::UnitsHelp, "Units desk");

        assert_eq!(templates.text(TemplateName::UnitsHelp).unwrap(), "Units desk");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(12500), "12,500");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-4500), "-4,500");
    }

    #[test]
    fn test_format_gpa() {
        assert_eq!(format_gpa(3.5), "3.5");
        assert_eq!(format_gpa(3.0), "3.0");
        assert_eq!(format_gpa(3.25), "3.25");
    }
}
