use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Missing search query parameter")]
    MissingQuery,

    #[error("Product not found")]
    NotFound,

    /// Path id is not a valid ObjectId. Reported as a server-side lookup failure.
    #[error("Invalid product id: {0}")]
    InvalidId(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::MissingFields | ProductError::MissingQuery => {
                AppError::BadRequest(err.to_string())
            }
            ProductError::NotFound => AppError::NotFound(err.to_string()),
            ProductError::InvalidId(id) => AppError::InvalidIdentifier(id),
            ProductError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for ProductError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}
