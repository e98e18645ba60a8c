//! Storage doubles for failure-path tests.

#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use filebucket_core::StorageBackend;
use filebucket_storage::{ByteStream, Storage, StorageError, StorageResult};

/// Backend text that must never reach a client.
pub const LEAKY_BACKEND_MESSAGE: &str =
    "AccessDenied: User arn:aws:iam::123456789012:user/ci is not authorized";

/// How every call of [`FailingStorage`] fails.
#[derive(Clone, Copy)]
pub enum Failure {
    Backend,
    Credentials,
}

/// Storage whose every operation fails.
pub struct FailingStorage {
    pub failure: Failure,
}

impl FailingStorage {
    pub fn new(failure: Failure) -> Self {
        Self { failure }
    }

    fn error(&self) -> StorageError {
        match self.failure {
            Failure::Backend => StorageError::BackendError(LEAKY_BACKEND_MESSAGE.to_string()),
            Failure::Credentials => {
                StorageError::CredentialsUnavailable(LEAKY_BACKEND_MESSAGE.to_string())
            }
        }
    }
}

#[async_trait]
impl Storage for FailingStorage {
    async fn put(&self, _key: &str, _data: Bytes, _content_type: &str) -> StorageResult<String> {
        Err(self.error())
    }

    async fn list(&self) -> StorageResult<Vec<String>> {
        Err(self.error())
    }

    async fn get(&self, _key: &str) -> StorageResult<ByteStream> {
        Err(self.error())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }

    fn bucket(&self) -> &str {
        "failing-bucket"
    }
}
