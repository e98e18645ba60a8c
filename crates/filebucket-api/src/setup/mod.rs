//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from main.rs
//! for better organization and testability.

pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::{Context, Result};
use filebucket_core::Config;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Initialize telemetry first so storage setup is logged
    crate::telemetry::init_telemetry(config.log_format())
        .context("Failed to initialize telemetry")?;

    tracing::info!(
        environment = %config.environment(),
        "Configuration loaded and validated successfully"
    );

    // Setup storage
    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState::new(config.clone(), storage));

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
