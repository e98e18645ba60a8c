//! Application state shared by every handler.
//!
//! Everything here is built once at startup and never mutated afterwards, so
//! handlers share it through an `Arc` without locking.

use filebucket_core::{Config, UploadValidator};
use filebucket_storage::Storage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    pub validator: UploadValidator,
}

impl AppState {
    /// Build the state, deriving the upload validator from configuration.
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        let validator = UploadValidator::new(
            config.max_file_size_bytes(),
            config.allowed_content_types().to_vec(),
        );
        Self {
            config,
            storage,
            validator,
        }
    }
}
