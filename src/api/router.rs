use std::any::Any;

use axum::{
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::error;

use super::chat;
use super::health;
use super::middleware::{logging_middleware, security_headers_middleware};
use super::state::AppState;
use super::types::ChatResponse;

/// Create the router with application state
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/chat", post(chat::chat))
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .with_state(state);

    with_layers(routes)
}

/// Panic recovery sits innermost so the recovered 500 still passes through
/// the header and logging middleware.
fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    error!(panic = %detail, "Handler panicked");
    ChatResponse::internal_error().into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::api::types::INTERNAL_ERROR_TEXT;
    use crate::domain::response::MockFallback;
    use crate::domain::student::MockUserDirectory;
    use crate::domain::{DomainError, ResponseResolver, StudentId, StudentProfile, UserDirectory};
    use crate::infrastructure::assistant::AssistantService;
    use crate::infrastructure::cache::InMemoryResponseCache;
    use crate::infrastructure::student::InMemoryUserDirectory;

    #[derive(Debug)]
    struct PanickingDirectory;

    #[async_trait]
    impl UserDirectory for PanickingDirectory {
        async fn lookup(&self, _id: &StudentId) -> Result<StudentProfile, DomainError> {
            panic!("directory exploded");
        }
    }

    fn app_with_directory(directory: Arc<dyn UserDirectory>) -> Router {
        let assistant = AssistantService::new(
            directory,
            Arc::new(InMemoryResponseCache::default()),
            ResponseResolver::new(Arc::new(MockFallback::new("generated answer"))),
        );

        create_router(AppState::new(Arc::new(assistant), "student123"))
    }

    fn app() -> Router {
        app_with_directory(Arc::new(InMemoryUserDirectory::with_demo_data()))
    }

    fn chat_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

        let (status, json) = send(app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_live() {
        let request = Request::builder().uri("/live").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_chat_fee_balance() {
        let request = chat_request(r#"{"message": "What is my fee balance?"}"#);

        let (status, json) = send(app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "success");
        assert!(json["audio"].is_null());
        assert!(json["response"].as_str().unwrap().contains("KES 12,500"));
        assert!(json["response_time"].as_str().unwrap().ends_with('s'));
    }

    #[tokio::test]
    async fn test_chat_general_uses_fallback() {
        let request = chat_request(r#"{"message": "Where is the gym?"}"#);

        let (status, json) = send(app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["response"], "generated answer");
    }

    #[tokio::test]
    async fn test_chat_blank_message_rejected() {
        let (status, json) = send(app(), chat_request(r#"{"message": "   "}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["type"], "invalid_request_error");
        assert_eq!(json["error"]["param"], "message");
    }

    #[tokio::test]
    async fn test_chat_missing_message_rejected() {
        let (status, _) = send(app(), chat_request("{}")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_chat_malformed_json_rejected() {
        let (status, json) = send(app(), chat_request("{oops")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "invalid_json");
    }

    #[tokio::test]
    async fn test_chat_pipeline_error_is_apologetic_500() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_lookup()
            .returning(|_| Err(DomainError::directory("backend offline")));

        let (status, json) = send(
            app_with_directory(Arc::new(directory)),
            chat_request(r#"{"message": "my fee"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["response"], INTERNAL_ERROR_TEXT);
        assert_eq!(json["status"], "error");
        assert_eq!(json["code"], "internal_error");
        assert!(json["audio"].is_null());
    }

    #[tokio::test]
    async fn test_chat_panic_is_apologetic_500() {
        let app = app_with_directory(Arc::new(PanickingDirectory));

        let response = app
            .oneshot(chat_request(r#"{"message": "my fee"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["code"], "internal_error");
    }

    #[tokio::test]
    async fn test_request_id_echoed() {
        let request = Request::builder()
            .uri("/live")
            .header("x-request-id", "req-42")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.headers()["x-request-id"], "req-42");
    }
}
