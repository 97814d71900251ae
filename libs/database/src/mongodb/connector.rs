use mongodb::{Client, bson::doc, options::ClientOptions};
use std::time::Duration;
use tracing::{error, info};

use super::MongoConfig;
use crate::common::{DatabaseError, DatabaseResult};

/// Build a client from config without touching the network beyond URL/SRV resolution.
///
/// The driver connects lazily, so the returned client may point at an unreachable server.
pub async fn build_client(config: &MongoConfig) -> DatabaseResult<Client> {
    let mut options = ClientOptions::parse(&config.url)
        .await
        .map_err(|e| DatabaseError::ConfigError(e.to_string()))?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    Ok(Client::with_options(options)?)
}

/// Round-trip a `ping` to the server.
pub async fn ping(client: &Client) -> DatabaseResult<()> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
    Ok(())
}

/// Connect and verify the server answers, failing if it does not.
///
/// # Example
/// ```ignore
/// use database::mongodb::{MongoConfig, connect_from_config};
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "ecommerce");
/// let client = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    info!("Attempting to connect to MongoDB at {}", config.redacted_url());

    let client = build_client(config).await?;
    ping(&client).await?;

    info!(database = %config.database, "Successfully connected to MongoDB");
    Ok(client)
}

/// Connect, logging the outcome of the initial ping instead of failing on it.
///
/// An unreachable server does not stop startup: the client is returned anyway and
/// every later operation reports its own failure. Only an unusable URL is an error.
/// No retries are attempted here.
pub async fn connect_lenient(config: &MongoConfig) -> DatabaseResult<Client> {
    info!("Attempting to connect to MongoDB at {}", config.redacted_url());

    let client = build_client(config).await?;

    match ping(&client).await {
        Ok(()) => info!(database = %config.database, "Successfully connected to MongoDB"),
        Err(e) => error!(
            database = %config.database,
            error = %e,
            "MongoDB connection failed, continuing without a verified store"
        ),
    }

    Ok(client)
}
