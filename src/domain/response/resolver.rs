//! Response resolution per intent

use std::collections::HashMap;
use std::sync::Arc;

use super::fallback::GenerativeFallback;
use super::template::{format_gpa, group_thousands, ResponseTemplates, TemplateName};
use crate::domain::intent::{Intent, UserQuery};
use crate::domain::student::StudentProfile;
use crate::domain::DomainError;

/// Students owing less than this (KES) may register units
pub const REGISTRATION_BALANCE_LIMIT: i64 = 5_000;

/// Turns a classified query into response text
#[derive(Debug, Clone)]
pub struct ResponseResolver {
    templates: ResponseTemplates,
    fallback: Arc<dyn GenerativeFallback>,
}

impl ResponseResolver {
    pub fn new(fallback: Arc<dyn GenerativeFallback>) -> Self {
        Self {
            templates: ResponseTemplates::default(),
            fallback,
        }
    }

    pub fn with_templates(mut self, templates: ResponseTemplates) -> Self {
        self.templates = templates;
        self
    }

    pub async fn resolve(
        &self,
        intent: Intent,
        query: &UserQuery,
        profile: &StudentProfile,
    ) -> Result<String, DomainError> {
        let text = match intent {
            Intent::Greeting => self.templates.render(
                TemplateName::Greeting,
                &HashMap::from([("name", profile.display_name().to_string())]),
            )?,
            Intent::Results => self.resolve_results(query, profile)?,
            Intent::Fees => self.templates.render(
                TemplateName::FeeBalance,
                &HashMap::from([("balance", group_thousands(profile.fee_balance))]),
            )?,
            Intent::Registration => self.resolve_registration(profile)?,
            Intent::Reporting => self.templates.text(TemplateName::ReportingHelp)?,
            Intent::Units => self.templates.text(TemplateName::UnitsHelp)?,
            Intent::General => self.fallback.generate(query.raw()).await,
        };

        Ok(text)
    }

    /// Only the current semester is served; any other results request
    /// gets the instructional text, including "previous results".
    fn resolve_results(
        &self,
        query: &UserQuery,
        profile: &StudentProfile,
    ) -> Result<String, DomainError> {
        if !query.normalized().contains("current") {
            return Ok(self.templates.text(TemplateName::ResultsHelp)?);
        }

        let semester = profile.current_semester_label();
        let semester_vars = HashMap::from([("semester", semester.to_string())]);

        let Some(results) = profile.current_semester_results() else {
            return Ok(self
                .templates
                .render(TemplateName::ResultsUnavailable, &semester_vars)?);
        };

        let mut lines = vec![self.templates.render(TemplateName::ResultsHeader, &semester_vars)?];
        lines.extend(
            results
                .units
                .iter()
                .map(|unit| format!("• {}: {} ({}%)", unit.name, unit.grade, unit.marks)),
        );
        lines.push(self.templates.render(
            TemplateName::ResultsGpa,
            &HashMap::from([("gpa", format_gpa(results.gpa))]),
        )?);

        Ok(lines.join("\n"))
    }

    fn resolve_registration(&self, profile: &StudentProfile) -> Result<String, DomainError> {
        let text = if profile.fee_balance < REGISTRATION_BALANCE_LIMIT {
            self.templates.text(TemplateName::RegistrationEligible)?
        } else {
            self.templates.render(
                TemplateName::RegistrationNotEligible,
                &HashMap::from([("balance", group_thousands(profile.fee_balance))]),
            )?
        };

        Ok(text)
    }
}
