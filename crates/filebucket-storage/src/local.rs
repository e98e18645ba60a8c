use crate::keys::{encode_key, validate_key};
use crate::traits::{ByteStream, Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;

/// Local filesystem storage implementation
///
/// Each key maps to a file under `base_path`; `/` in a key becomes a directory.
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
    root: String,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for file storage (e.g., "/var/lib/filebucket")
    /// * `base_url` - Base URL the directory is served from (e.g., "http://localhost:8000/files")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            root: base_path.display().to_string(),
            base_path,
            base_url,
        })
    }

    /// Convert storage key to filesystem path
    fn key_to_path(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.base_path.join(key))
    }

    /// Generate public URL for file
    fn generate_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), encode_key(key))
    }

    /// Ensure parent directory exists
    async fn ensure_parent_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Walk the storage directory and collect file paths relative to the root.
    async fn walk(&self) -> StorageResult<Vec<String>> {
        let mut keys = Vec::new();
        let mut pending = vec![self.base_path.clone()];

        while let Some(dir) = pending.pop() {
            let mut entries = fs::read_dir(&dir).await?;
            while let Some(entry) = entries.next_entry().await? {
                let file_type = entry.file_type().await?;
                let path = entry.path();
                if file_type.is_dir() {
                    pending.push(path);
                } else if file_type.is_file() {
                    if let Ok(relative) = path.strip_prefix(&self.base_path) {
                        let key = relative
                            .components()
                            .map(|c| c.as_os_str().to_string_lossy())
                            .collect::<Vec<_>>()
                            .join("/");
                        keys.push(key);
                    }
                }
            }
        }

        Ok(keys)
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn put(&self, key: &str, data: Bytes, _content_type: &str) -> StorageResult<String> {
        let path = self.key_to_path(key)?;
        let size = data.len();

        self.ensure_parent_dir(&path).await?;

        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::BackendError(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&data).await.map_err(|e| {
            StorageError::BackendError(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::BackendError(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        let url = self.generate_url(key);

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage put successful"
        );

        Ok(url)
    }

    async fn list(&self) -> StorageResult<Vec<String>> {
        let start = std::time::Instant::now();

        let keys = self.walk().await.map_err(|e| {
            tracing::error!(
                error = %e,
                path = %self.base_path.display(),
                "Local storage list failed"
            );
            e
        })?;

        tracing::info!(
            path = %self.base_path.display(),
            count = keys.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage list successful"
        );

        Ok(keys)
    }

    async fn get(&self, key: &str) -> StorageResult<ByteStream> {
        let path = self.key_to_path(key)?;

        let file = match fs::File::open(&path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(key.to_string()));
            }
            Err(e) => {
                return Err(StorageError::BackendError(format!(
                    "Failed to open file {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        // A directory opens fine on some platforms but is not an object.
        let metadata = file.metadata().await?;
        if !metadata.is_file() {
            return Err(StorageError::NotFound(key.to_string()));
        }

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = metadata.len(),
            "Local storage get successful"
        );

        let stream = ReaderStream::new(file).map(|res| res.map_err(StorageError::from));
        Ok(Box::pin(stream))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }

    fn bucket(&self) -> &str {
        &self.root
    }
}
