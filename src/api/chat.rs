//! Chat endpoint handler

use std::time::Instant;

use axum::extract::State;
use tracing::{error, info};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ChatRequest, ChatResponse, Json};

/// POST /chat
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<ChatResponse, ApiError> {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let Some(message) = request.trimmed_message() else {
        return Err(ApiError::bad_request("Message is required").with_param("message"));
    };

    info!(
        request_id = %request_id,
        student_id = %state.default_user_id,
        chars = message.len(),
        "Processing chat request"
    );

    match state
        .assistant
        .process_query(&state.default_user_id, message)
        .await
    {
        Ok(entry) => Ok(ChatResponse::success(entry, start.elapsed())),
        Err(e) => {
            error!(request_id = %request_id, error = %e, "Chat request failed");
            Ok(ChatResponse::internal_error())
        }
    }
}
