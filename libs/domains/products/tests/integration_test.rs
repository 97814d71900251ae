//! Integration tests for Products domain
//!
//! These tests use a real MongoDB via testcontainers to check:
//! - documents round-trip through the collection unchanged
//! - partial updates and wholesale variant replacement
//! - case-insensitive search across name, description and variant names
//! - malformed ids are rejected before reaching the server

use domain_products::*;
use test_utils::{TestDataBuilder, TestMongo, assertions::*};

fn new_product(builder: &TestDataBuilder, suffix: &str) -> NewProduct {
    NewProduct {
        name: builder.name("product", suffix),
        description: "Integration test product".to_string(),
        price: 19.5,
        variants: vec![Variant {
            name: Some("Standard".to_string()),
            sku: Some(builder.sku(suffix)),
            additional_cost: Some(0.0),
            stock_count: Some(4),
        }],
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
#[ignore] // Requires Docker
async fn test_create_and_get_product() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());
    let builder = TestDataBuilder::from_test_name("create_and_get");

    let created = repo.create(new_product(&builder, "main")).await.unwrap();
    assert_object_id(&created.id.to_hex(), "created id");

    let retrieved = repo.get_by_id(&created.id.to_hex()).await.unwrap();
    let retrieved = assert_some(retrieved, "product should exist");
    assert_eq!(retrieved, created);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_get_absent_and_malformed_ids() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());
    let builder = TestDataBuilder::from_test_name("absent_and_malformed");

    assert!(repo.get_by_id(&builder.absent_id()).await.unwrap().is_none());

    let err = repo.get_by_id("not-an-object-id").await.unwrap_err();
    assert!(matches!(err, ProductError::InvalidId(_)));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_list_counts_creates_minus_deletes() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());
    let builder = TestDataBuilder::from_test_name("list_count");

    let first = repo.create(new_product(&builder, "one")).await.unwrap();
    repo.create(new_product(&builder, "two")).await.unwrap();
    repo.create(new_product(&builder, "three")).await.unwrap();

    let removed = repo.delete(&first.id.to_hex()).await.unwrap();
    assert_eq!(assert_some(removed, "deleted product").id, first.id);

    assert_eq!(repo.list().await.unwrap().len(), 2);
    assert!(repo.delete(&first.id.to_hex()).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_sets_present_fields_and_replaces_variants() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());
    let builder = TestDataBuilder::from_test_name("update_partial");

    let created = repo.create(new_product(&builder, "main")).await.unwrap();
    let id = created.id.to_hex();

    let update = UpdateProduct {
        price: Some(25.0),
        variants: Some(vec![Variant {
            name: Some("Large".to_string()),
            ..Default::default()
        }]),
        ..Default::default()
    };
    let updated = assert_some(repo.update(&id, update).await.unwrap(), "updated");

    assert_eq!(updated.name, created.name);
    assert_eq!(updated.price, 25.0);
    assert_eq!(updated.variants.len(), 1);
    assert_eq!(updated.variants[0].name.as_deref(), Some("Large"));
    assert!(updated.variants[0].sku.is_none());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_empty_update_returns_current_document() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());
    let builder = TestDataBuilder::from_test_name("update_empty");

    let created = repo.create(new_product(&builder, "main")).await.unwrap();
    let id = created.id.to_hex();

    let unchanged = repo.update(&id, UpdateProduct::default()).await.unwrap();
    assert_eq!(assert_some(unchanged, "current document"), created);

    let absent = repo
        .update(&builder.absent_id(), UpdateProduct::default())
        .await
        .unwrap();
    assert!(absent.is_none());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_search_is_case_insensitive_across_fields() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());

    let by_name = NewProduct {
        name: "Blue Teapot".to_string(),
        description: "Porcelain".to_string(),
        price: 30.0,
        variants: vec![Variant::default()],
    };
    let by_description = NewProduct {
        name: "Kettle".to_string(),
        description: "Pairs well with a TEAPOT".to_string(),
        price: 45.0,
        variants: vec![Variant::default()],
    };
    let by_variant = NewProduct {
        name: "Gift set".to_string(),
        description: "Assorted".to_string(),
        price: 60.0,
        variants: vec![Variant {
            name: Some("teapot edition".to_string()),
            ..Default::default()
        }],
    };
    let unrelated = NewProduct {
        name: "Mug".to_string(),
        description: "Ceramic".to_string(),
        price: 8.0,
        variants: vec![Variant::default()],
    };

    for input in [by_name, by_description, by_variant, unrelated] {
        repo.create(input).await.unwrap();
    }

    let results = repo.search("tEaPoT").await.unwrap();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|p| p.name != "Mug"));

    assert!(repo.search("espresso").await.unwrap().is_empty());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_search_treats_query_literally() {
    let mongo = TestMongo::new().await;
    let repo = MongoProductRepository::new(&mongo.database());
    let builder = TestDataBuilder::from_test_name("search_literal");

    let mut input = new_product(&builder, "main");
    input.name = "Cable (2m)".to_string();
    repo.create(input).await.unwrap();

    assert_eq!(repo.search("(2m)").await.unwrap().len(), 1);
    assert!(repo.search(".*").await.unwrap().is_empty());
}
