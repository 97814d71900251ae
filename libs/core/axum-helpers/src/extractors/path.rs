//! Path parameter extractor whose rejection uses the crate's error body.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Path parameter extractor.
///
/// Behaves like [`axum::extract::Path`] but answers an undecodable segment with a 400
/// `{"error": "Invalid path parameter"}`. The value itself is not validated here.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::PathParam;
///
/// async fn get_product(PathParam(id): PathParam<String>) -> impl IntoResponse {
///     // ...
/// }
/// ```
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(PathParam(value))
    }
}
