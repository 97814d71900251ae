//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, NewProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Runs the create presence check, rejects empty search queries and turns
/// absent documents into `NotFound`. Everything else goes straight to the repository.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound)
    }

    /// Create a product once name, description, price and variants are all present
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let input = NewProduct::try_from(input)?;
        self.repository.create(input).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: UpdateProduct) -> ProductResult<Product> {
        self.repository
            .update(id, input)
            .await?
            .ok_or(ProductError::NotFound)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<Product> {
        self.repository
            .delete(id)
            .await?
            .ok_or(ProductError::NotFound)
    }

    #[instrument(skip(self))]
    pub async fn search_products(&self, query: Option<&str>) -> ProductResult<Vec<Product>> {
        match query {
            Some(q) if !q.is_empty() => self.repository.search(q).await,
            _ => Err(ProductError::MissingQuery),
        }
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Variant;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;
    use mongodb::bson::oid::ObjectId;

    const VALID_ID: &str = "65f1c0ffee0000000000abcd";

    fn sample_product() -> Product {
        Product {
            id: ObjectId::parse_str(VALID_ID).unwrap(),
            name: "Mug".to_string(),
            description: "Ceramic mug".to_string(),
            price: 9.99,
            variants: vec![Variant {
                name: Some("Red".to_string()),
                ..Default::default()
            }],
        }
    }

    fn complete_input() -> CreateProduct {
        CreateProduct {
            name: Some("Mug".to_string()),
            description: Some("Ceramic mug".to_string()),
            price: Some(9.99),
            variants: Some(vec![Variant::default()]),
        }
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        let mut mock = MockProductRepository::new();
        mock.expect_get_by_id()
            .with(eq(VALID_ID))
            .times(1)
            .returning(|_| Ok(None));

        let service = ProductService::new(mock);
        let err = service.get_product(VALID_ID).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound));
    }

    #[tokio::test]
    async fn test_get_product_found() {
        let mut mock = MockProductRepository::new();
        mock.expect_get_by_id()
            .with(eq(VALID_ID))
            .returning(|_| Ok(Some(sample_product())));

        let service = ProductService::new(mock);
        let product = service.get_product(VALID_ID).await.unwrap();
        assert_eq!(product.name, "Mug");
    }

    #[tokio::test]
    async fn test_get_product_propagates_invalid_id() {
        let mut mock = MockProductRepository::new();
        mock.expect_get_by_id()
            .returning(|id| Err(ProductError::InvalidId(id.to_string())));

        let service = ProductService::new(mock);
        let err = service.get_product("xyz").await.unwrap_err();
        assert!(matches!(err, ProductError::InvalidId(_)));
    }

    #[tokio::test]
    async fn test_create_product_passes_checked_input() {
        let mut mock = MockProductRepository::new();
        mock.expect_create()
            .withf(|input| input.name == "Mug" && input.price == 9.99)
            .times(1)
            .returning(|input| Ok(Product::new(input)));

        let service = ProductService::new(mock);
        let product = service.create_product(complete_input()).await.unwrap();
        assert_eq!(product.description, "Ceramic mug");
    }

    #[tokio::test]
    async fn test_create_product_missing_fields_skips_storage() {
        let mut mock = MockProductRepository::new();
        mock.expect_create().never();

        let service = ProductService::new(mock);
        let input = CreateProduct {
            variants: None,
            ..complete_input()
        };
        let err = service.create_product(input).await.unwrap_err();
        assert!(matches!(err, ProductError::MissingFields));
    }

    #[tokio::test]
    async fn test_update_product_not_found() {
        let mut mock = MockProductRepository::new();
        mock.expect_update()
            .with(eq(VALID_ID), eq(UpdateProduct::default()))
            .returning(|_, _| Ok(None));

        let service = ProductService::new(mock);
        let err = service
            .update_product(VALID_ID, UpdateProduct::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_product_returns_removed_document() {
        let mut mock = MockProductRepository::new();
        mock.expect_delete()
            .with(eq(VALID_ID))
            .times(1)
            .returning(|_| Ok(Some(sample_product())));

        let service = ProductService::new(mock);
        let removed = service.delete_product(VALID_ID).await.unwrap();
        assert_eq!(removed.id.to_hex(), VALID_ID);
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let mut mock = MockProductRepository::new();
        mock.expect_search().never();

        let service = ProductService::new(mock);
        for query in [None, Some("")] {
            let err = service.search_products(query).await.unwrap_err();
            assert!(matches!(err, ProductError::MissingQuery));
        }
    }

    #[tokio::test]
    async fn test_search_passes_query_through() {
        let mut mock = MockProductRepository::new();
        mock.expect_search()
            .with(eq("mug"))
            .times(1)
            .returning(|_| Ok(vec![sample_product()]));

        let service = ProductService::new(mock);
        let products = service.search_products(Some("mug")).await.unwrap();
        assert_eq!(products.len(), 1);
    }
}
