pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Every error leaves the service with exactly one field:
///
/// ```json
/// { "error": "Product not found" }
/// ```
///
/// Error codes are attached to the log event instead of the body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Application error type that can be converted to HTTP responses.
///
/// Server-side variants (5xx) keep their detail for the log and answer with the generic
/// `Internal Server Error` message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    /// Body rejected by `axum::Json`. A well-formed body whose values cannot be cast to the
    /// target types is a server-side fault; everything else is a client error.
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query string error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Path parameter error: {0}")]
    PathExtractorRejection(#[from] PathRejection),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(JsonRejection::JsonDataError(_))
            | AppError::InvalidIdentifier(_)
            | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::JsonExtractorRejection(_)
            | AppError::QueryExtractorRejection(_)
            | AppError::PathExtractorRejection(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let internal = ErrorCode::InternalError.default_message().to_string();

        let (status, message, code) = match self {
            AppError::JsonExtractorRejection(JsonRejection::JsonDataError(e)) => {
                tracing::error!(
                    error_code = ErrorCode::JsonCast.code(),
                    "JSON body could not be cast: {}",
                    e.body_text()
                );
                (StatusCode::INTERNAL_SERVER_ERROR, internal, ErrorCode::JsonCast)
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {}",
                    e.body_text()
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::JsonExtraction.default_message().to_string(),
                    ErrorCode::JsonExtraction,
                )
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::QueryExtraction.code(),
                    "Query string error: {}",
                    e.body_text()
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::QueryExtraction.default_message().to_string(),
                    ErrorCode::QueryExtraction,
                )
            }
            AppError::PathExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::PathExtraction.code(),
                    "Path parameter error: {}",
                    e.body_text()
                );
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::PathExtraction.default_message().to_string(),
                    ErrorCode::PathExtraction,
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Bad request: {}",
                    msg
                );
                (StatusCode::BAD_REQUEST, msg, ErrorCode::ValidationError)
            }
            AppError::NotFound(msg) => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    msg
                );
                (StatusCode::NOT_FOUND, msg, ErrorCode::NotFound)
            }
            AppError::InvalidIdentifier(id) => {
                tracing::error!(
                    error_code = ErrorCode::InvalidObjectId.code(),
                    id = %id,
                    "Invalid object id"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    internal,
                    ErrorCode::InvalidObjectId,
                )
            }
            AppError::Database(msg) => {
                tracing::error!(
                    error_code = ErrorCode::DatabaseError.code(),
                    "Database error: {}",
                    msg
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    internal,
                    ErrorCode::DatabaseError,
                )
            }
        };

        tracing::debug!(error = code.as_str(), status = status.as_u16(), "Error response");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Helper function to create error responses.
///
/// # Example
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(StatusCode::NOT_FOUND, "Not Found", ErrorCode::RouteNotFound);
/// ```
pub fn error_response(
    status: StatusCode,
    message: impl Into<String>,
    error_code: ErrorCode,
) -> Response {
    tracing::debug!(error_code = error_code.code(), "{}", error_code);
    let body = Json(ErrorResponse {
        error: message.into(),
    });

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_bad_request_keeps_message() {
        let (status, body) = render(AppError::BadRequest("Missing required fields".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({"error": "Missing required fields"}));
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let (status, body) = render(AppError::NotFound("Product not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Product not found");
    }

    #[tokio::test]
    async fn test_server_errors_hide_details() {
        for err in [
            AppError::Database("connection reset by peer".into()),
            AppError::InvalidIdentifier("not-an-id".into()),
        ] {
            let (status, body) = render(err).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, serde_json::json!({"error": "Internal Server Error"}));
        }
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::InvalidIdentifier("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::BadRequest("Missing required fields".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_error_response_helper() {
        let response = error_response(StatusCode::NOT_FOUND, "Not Found", ErrorCode::RouteNotFound);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], br#"{"error":"Not Found"}"#);
    }
}
