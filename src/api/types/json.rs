//! JSON extractor whose rejections use the API error body

use axum::{
    extract::{rejection::JsonRejection as AxumRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiErrorType};

/// Drop-in for `axum::Json` that reports malformed bodies as JSON errors
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug)]
pub struct JsonRejection(ApiError);

impl JsonRejection {
    fn from_axum(rejection: &AxumRejection) -> Self {
        let error = ApiError::new(
            rejection.status(),
            ApiErrorType::InvalidRequestError,
            rejection_message(rejection),
        )
        .with_code("invalid_json");

        Self(error)
    }
}

impl IntoResponse for JsonRejection {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        AxumJson::<T>::from_request(req, state)
            .await
            .map(|AxumJson(value)| Json(value))
            .map_err(|rejection| JsonRejection::from_axum(&rejection))
    }
}

fn rejection_message(rejection: &AxumRejection) -> String {
    match rejection {
        AxumRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
        AxumRejection::JsonSyntaxError(err) => {
            format!("Invalid JSON syntax: {}", err.body_text())
        }
        AxumRejection::MissingJsonContentType(_) => {
            "Missing Content-Type header. Expected 'application/json'.".to_string()
        }
        AxumRejection::BytesRejection(err) => {
            format!("Failed to read request body: {}", err.body_text())
        }
        _ => "Invalid JSON request".to_string(),
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode};

    use crate::api::types::ChatRequest;

    fn json_request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/chat");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_extracts_valid_body() {
        let request = json_request(Some("application/json"), r#"{"message":"hi"}"#);

        let Json(body) = Json::<ChatRequest>::from_request(request, &()).await.unwrap();

        assert_eq!(body.message.as_deref(), Some("hi"));
    }

    #[tokio::test]
    async fn test_syntax_error_is_json_400() {
        let request = json_request(Some("application/json"), "{not json");

        let rejection = Json::<ChatRequest>::from_request(request, &()).await.unwrap_err();
        let response = rejection.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let request = json_request(None, r#"{"message":"hi"}"#);

        let rejection = Json::<ChatRequest>::from_request(request, &()).await.unwrap_err();

        assert_eq!(rejection.0.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(rejection.0.response.error.code.as_deref(), Some("invalid_json"));
    }

    #[test]
    fn test_deref() {
        let json = Json("hello".to_string());
        assert_eq!(*json, "hello");
    }
}
