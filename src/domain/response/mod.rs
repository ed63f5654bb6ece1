//! Response domain - templates, resolution and the generative fallback seam

mod fallback;
mod resolver;
mod template;

pub use fallback::GenerativeFallback;
pub use resolver::{ResponseResolver, REGISTRATION_BALANCE_LIMIT};
pub use template::{
    format_gpa, group_thousands, ResponseTemplate, ResponseTemplates, TemplateError, TemplateName,
};

#[cfg(test)]
pub use fallback::mock::MockFallback;
