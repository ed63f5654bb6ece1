//! Chat endpoint payloads

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::CacheEntry;

/// Body sent when the pipeline fails or a handler panics
pub const INTERNAL_ERROR_TEXT: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    /// Trimmed message, `None` when missing or blank
    pub fn trimmed_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub audio: Option<String>,
    pub status: ChatStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ChatResponse {
    pub fn success(entry: CacheEntry, elapsed: Duration) -> Self {
        Self {
            response: entry.text,
            audio: entry.audio,
            status: ChatStatus::Success,
            response_time: Some(format_response_time(elapsed)),
            code: None,
        }
    }

    pub fn internal_error() -> Self {
        Self {
            response: INTERNAL_ERROR_TEXT.to_string(),
            audio: None,
            status: ChatStatus::Error,
            response_time: None,
            code: Some("internal_error".to_string()),
        }
    }
}

impl IntoResponse for ChatResponse {
    fn into_response(self) -> Response {
        let status = match self.status {
            ChatStatus::Success => StatusCode::OK,
            ChatStatus::Error => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(self)).into_response()
    }
}

/// Seconds with millisecond precision, e.g. "0.012s"
pub fn format_response_time(elapsed: Duration) -> String {
    format!("{:.3}s", elapsed.as_secs_f64())
}
