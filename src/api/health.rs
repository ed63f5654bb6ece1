//! Health check endpoints

use axum::{http::StatusCode, response::IntoResponse};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::api::types::Json;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

impl HealthResponse {
    pub fn healthy(now: DateTime<Utc>) -> Self {
        Self {
            status: HealthStatus::Healthy,
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::healthy(Utc::now())))
}

/// GET /live - liveness probe
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}
