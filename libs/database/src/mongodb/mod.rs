//! MongoDB connector and utilities
//!
//! Provides client construction, connection verification and health checks.

mod config;
mod connector;
mod health;

pub use config::{DEFAULT_DATABASE, DEFAULT_URL, MongoConfig};
pub use connector::{build_client, connect_from_config, connect_lenient, ping};
pub use health::{HealthStatus, check_health, check_health_detailed};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
