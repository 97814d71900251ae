//! Custom extractors for Axum handlers.
//!
//! Each wraps the axum extractor of the same purpose and rejects with [`AppError`], so every
//! failure leaves the service as a JSON `{"error": ...}` body.
//!
//! [`AppError`]: crate::errors::AppError

pub mod json_body;
pub mod path;
pub mod query;

pub use json_body::JsonBody;
pub use path::PathParam;
pub use query::QueryParams;
