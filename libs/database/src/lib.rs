//! Database connectors for the products service
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client construction, verification and health checks
//! - `config` - Loading `MongoConfig` through `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_lenient};
//!
//! let config = MongoConfig::default(); // mongodb://127.0.0.1:27017, database "ecommerce"
//! let client = connect_lenient(&config).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
