//! Shared key rules and URL construction for storage backends.
//!
//! Keys are the uploaded filename. Every backend validates keys here before touching
//! the store, and builds public URLs with [`encode_key`] so URLs stay deterministic.

use crate::traits::{StorageError, StorageResult};

/// Check that a key is usable by every backend.
pub fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey("key is empty".to_string()));
    }
    if key.starts_with('/') {
        return Err(StorageError::InvalidKey(
            "key must not start with '/'".to_string(),
        ));
    }
    for segment in key.split('/') {
        match segment {
            "" => {
                return Err(StorageError::InvalidKey(
                    "key must not contain empty segments".to_string(),
                ))
            }
            "." | ".." => {
                return Err(StorageError::InvalidKey(format!(
                    "key must not contain '{}' segments",
                    segment
                )))
            }
            _ => {}
        }
    }
    if key.chars().any(char::is_control) {
        return Err(StorageError::InvalidKey(
            "key must not contain control characters".to_string(),
        ));
    }
    Ok(())
}

/// Percent-encode each `/`-separated segment of a key for use in a URL path.
pub fn encode_key(key: &str) -> String {
    key.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
