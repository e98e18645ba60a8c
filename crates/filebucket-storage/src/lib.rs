//! Filebucket Storage Library
//!
//! This crate is the only part of the system that talks to the object store. It
//! provides the `Storage` trait and implementations for S3 and the local filesystem.
//!
//! # Storage key format
//!
//! The key of an object is the uploaded filename, unchanged. The bucket is a flat
//! namespace; `/` inside a key is only a naming convention. Keys must be non-empty,
//! must not start with `/`, and must not contain a `..` segment or control
//! characters. The rules live in the `keys` module so all backends agree.

pub mod factory;
pub(crate) mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use filebucket_core::StorageBackend;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{read_all, ByteStream, Storage, StorageError, StorageResult};
