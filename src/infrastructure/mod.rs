//! Infrastructure layer - Concrete adapters behind the domain traits

pub mod assistant;
pub mod cache;
pub mod fallback;
pub mod llm;
pub mod logging;
pub mod student;
