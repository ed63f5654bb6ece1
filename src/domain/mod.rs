//! Domain layer - Core business logic and entities

pub mod cache;
pub mod error;
pub mod intent;
pub mod llm;
pub mod response;
pub mod student;

pub use cache::{CacheEntry, CacheKey, ResponseCache};
pub use error::DomainError;
pub use intent::{classify, Intent, UserQuery};
pub use llm::{FinishReason, LlmProvider, LlmRequest, LlmResponse, Message, MessageRole};
pub use response::{
    GenerativeFallback, ResponseResolver, ResponseTemplates, TemplateError, TemplateName,
};
pub use student::{
    FeeStructure, Payment, SemesterResult, StudentId, StudentProfile, UnitResult, UserDirectory,
};
