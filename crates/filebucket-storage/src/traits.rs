//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use crate::StorageBackend;
use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use filebucket_core::AppError;
use futures::{Stream, TryStreamExt};
use std::pin::Pin;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Storage credentials unavailable: {0}")]
    CredentialsUnavailable(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Object content as it arrives from the backend.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, StorageError>> + Send>>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(key) => AppError::NotFound(key),
            StorageError::CredentialsUnavailable(msg) => AppError::CredentialsUnavailable(msg),
            StorageError::InvalidKey(msg) => {
                AppError::InvalidInput(format!("Invalid file name: {}", msg))
            }
            StorageError::BackendError(msg) => AppError::StorageBackend(msg),
            StorageError::IoError(err) => AppError::StorageBackend(format!("IO error: {}", err)),
            StorageError::ConfigError(msg) => AppError::Internal(msg),
        }
    }
}

/// Storage abstraction trait
///
/// One instance is built at startup and shared by every request; implementations
/// hold no mutable state after construction. Concurrent writes to the same key are
/// resolved by the backend (last write wins).
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write `data` under `key`, replacing any existing object, and return the
    /// object's public URL.
    ///
    /// The URL is built from the bucket and key, never read back from the backend.
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> StorageResult<String>;

    /// List every key in the bucket.
    ///
    /// An empty bucket yields an empty vector. Order is whatever the backend returns.
    async fn list(&self) -> StorageResult<Vec<String>>;

    /// Open an object for reading.
    ///
    /// A missing key fails here with `NotFound`, before any byte is streamed.
    async fn get(&self, key: &str) -> StorageResult<ByteStream>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;

    /// Bucket (or root) name this instance is bound to
    fn bucket(&self) -> &str;
}

/// Drain a stream returned by [`Storage::get`] into a single buffer.
pub async fn read_all(stream: ByteStream) -> StorageResult<Bytes> {
    let buffer = stream
        .try_fold(BytesMut::new(), |mut acc, chunk| async move {
            acc.extend_from_slice(&chunk);
            Ok::<_, StorageError>(acc)
        })
        .await?;
    Ok(buffer.freeze())
}
