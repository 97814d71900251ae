use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// Ids are passed as the raw path string; implementations reject ids they
/// cannot parse with `ProductError::InvalidId`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in storage order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Case-insensitive literal substring match on name, description and variant names
    async fn search(&self, query: &str) -> ProductResult<Vec<Product>>;

    async fn create(&self, input: NewProduct) -> ProductResult<Product>;

    /// Set the present fields; returns the document after the update, `None` if absent
    async fn update(&self, id: &str, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Remove a product; returns the removed document, `None` if absent
    async fn delete(&self, id: &str) -> ProductResult<Option<Product>>;
}
