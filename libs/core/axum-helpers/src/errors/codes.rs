//! Type-safe error codes for logging.
//!
//! Each code carries a SCREAMING_SNAKE_CASE identifier, an integer for log/metric filters and
//! a default message. Response bodies only ever carry the message; the identifier and the
//! integer show up as structured fields on the log event.
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::InvalidObjectId;
//! assert_eq!(code.as_str(), "INVALID_OBJECT_ID");
//! assert_eq!(code.code(), 1002);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1999)
    /// Required request data was missing or empty
    ValidationError,

    /// Identifier in the path is not a valid ObjectId
    InvalidObjectId,

    /// Request body was not valid JSON or not sent as JSON
    JsonExtraction,

    /// Query string could not be decoded
    QueryExtraction,

    /// Path parameter could not be decoded
    PathExtraction,

    /// Requested resource was not found
    NotFound,

    /// No route matched the request
    RouteNotFound,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,

    /// Well-formed JSON body holding a value that cannot be cast to its field type
    JsonCast,

    // Database errors (2000-2999)
    /// Driver or server error while talking to the database
    DatabaseError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidObjectId => "INVALID_OBJECT_ID",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::QueryExtraction => "QUERY_EXTRACTION",
            Self::PathExtraction => "PATH_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::JsonCast => "JSON_CAST",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Integer code for logs and metrics.
    ///
    /// Ranges:
    /// - 1000-1999: request errors
    /// - 2000-2999: database errors
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::InvalidObjectId => 1002,
            Self::JsonExtraction => 1003,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::QueryExtraction => 1006,
            Self::PathExtraction => 1007,
            Self::JsonCast => 1008,
            Self::RouteNotFound => 1012,

            Self::DatabaseError => 2003,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::ValidationError => "Request validation failed",
            Self::InvalidObjectId => "Invalid identifier",
            Self::JsonExtraction => "Failed to parse request body",
            Self::QueryExtraction => "Invalid query string",
            Self::PathExtraction => "Invalid path parameter",
            Self::NotFound => "Resource not found",
            Self::RouteNotFound => "Not Found",
            Self::InternalError => "Internal Server Error",
            Self::JsonCast => "Internal Server Error",
            Self::DatabaseError => "Database error occurred",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
