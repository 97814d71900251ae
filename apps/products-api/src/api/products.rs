//! Products API routes

use axum::Router;
use domain_products::{MongoProductRepository, ProductService, handlers};

use crate::state::AppState;

fn service(state: &AppState) -> ProductService<MongoProductRepository> {
    ProductService::new(MongoProductRepository::new(&state.db))
}

/// Products router, nested under `/api/products`
pub fn router(state: &AppState) -> Router {
    handlers::router(service(state))
}

/// `/products/search` outside the `/api` prefix
pub fn legacy_router(state: &AppState) -> Router {
    handlers::legacy_router(service(state))
}
