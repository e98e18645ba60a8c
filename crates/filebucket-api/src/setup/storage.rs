//! Storage setup and initialization

use anyhow::{Context, Result};
use filebucket_core::Config;
use filebucket_storage::{create_storage, Storage};
use std::sync::Arc;

/// Build the one storage client shared by every request.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!(backend = %config.storage_backend(), "Initializing storage...");

    let storage = create_storage(config)
        .await
        .context("Failed to initialize storage backend")?;

    tracing::info!(
        backend = %storage.backend_type(),
        bucket = %storage.bucket(),
        "Storage initialized successfully"
    );

    Ok(storage)
}
