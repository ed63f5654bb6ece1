//! Shared HTTP request/response types

pub mod chat;
pub mod error;
pub mod json;

pub use chat::{ChatRequest, ChatResponse, ChatStatus, INTERNAL_ERROR_TEXT};
pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
