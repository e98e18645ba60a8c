//! Filebucket Core Library
//!
//! This crate provides the domain models, error taxonomy, configuration, and upload
//! validation shared by the storage gateway and the HTTP API.

pub mod config;
pub mod error;
pub mod models;
pub mod storage_types;
pub mod validation;

// Re-export commonly used types
pub use config::{BaseConfig, Config, LogFormat, StorageConfig, UploadConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;
pub use validation::{UploadValidator, ValidationError};
