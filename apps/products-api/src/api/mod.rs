//! API routes module

pub mod health;
pub mod products;

use axum::Router;
use axum_helpers::server::health_router;

use crate::state::AppState;

/// Routes nested under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Routes served at the root: probes and the legacy search path
pub fn root_routes(state: &AppState) -> Router {
    Router::new()
        .merge(health_router(state.config.app))
        .merge(health::router(state.clone()))
        .merge(products::legacy_router(state))
}
