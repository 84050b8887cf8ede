use axum::http::Uri;

use crate::app::ApiError;

/// JSON 404 that logs the requested path.
pub async fn handler_404(uri: Uri) -> ApiError {
    tracing::warn!(path = %uri.path(), "404 request");
    ApiError::not_found()
}
