use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hoststat_core::CollectionError;
use serde_json::json;
use tokio::task::JoinError;

/// Failure boundary of a single request: always rendered as `{"error": ...}`.
#[derive(Debug)]
pub struct ApiError {
    message: String,
    status: StatusCode,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "not found")
    }
}

impl From<CollectionError> for ApiError {
    fn from(err: CollectionError) -> Self {
        tracing::error!(error = %err, "metrics collection failed");
        ApiError::internal(err.to_string())
    }
}

impl From<JoinError> for ApiError {
    fn from(err: JoinError) -> Self {
        tracing::error!(error = %err, "metrics collection task aborted");
        if err.is_panic() {
            ApiError::internal("metrics collection panicked")
        } else {
            ApiError::internal("metrics collection was cancelled")
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}
