use crate::keys::{encode_key, validate_key};
use crate::traits::{ByteStream, Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use futures::{StreamExt, TryStreamExt};
use object_store::aws::AmazonS3Builder;
use object_store::path::Path;
use object_store::Error as ObjectStoreError;
use object_store::{
    Attribute, Attributes, GetOptions, ObjectStore, PutOptions, PutPayload,
    Result as ObjectResult,
};
use std::sync::Arc;

/// S3 storage implementation
#[derive(Clone)]
pub struct S3Storage {
    store: Arc<dyn ObjectStore>,
    bucket: String,
    region: String,
    endpoint_url: Option<String>, // Custom endpoint for S3-compatible providers
}

/// Object path for a key, stored verbatim.
///
/// `Path::from` would percent-encode characters such as `%` or `[` and the stored
/// object would no longer match the key, so keys are parsed instead.
fn object_path(key: &str) -> StorageResult<Path> {
    validate_key(key)?;
    Path::parse(key).map_err(|e| StorageError::InvalidKey(e.to_string()))
}

/// Translate an `object_store` failure into the gateway taxonomy.
fn map_object_store_error(err: ObjectStoreError, key: &str) -> StorageError {
    match err {
        ObjectStoreError::NotFound { .. } => StorageError::NotFound(key.to_string()),
        ObjectStoreError::Unauthenticated { .. } => {
            StorageError::CredentialsUnavailable(err.to_string())
        }
        other => StorageError::BackendError(other.to_string()),
    }
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// Credentials are discovered by the client from the standard AWS environment
    /// (`AWS_ACCESS_KEY_ID`/`AWS_SECRET_ACCESS_KEY`, web identity, instance metadata).
    ///
    /// # Arguments
    /// * `bucket` - S3 bucket name
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    pub async fn new(
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
    ) -> StorageResult<Self> {
        let mut builder = AmazonS3Builder::from_env()
            .with_region(region.clone())
            .with_bucket_name(bucket.clone());

        if let Some(ref endpoint) = endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder
                .with_endpoint(endpoint.clone())
                .with_allow_http(allow_http);
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(Self::with_store(Arc::new(store), bucket, region, endpoint_url))
    }

    /// Wrap an already-built object store (used for S3-compatible test doubles).
    pub fn with_store(
        store: Arc<dyn ObjectStore>,
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
    ) -> Self {
        S3Storage {
            store,
            bucket,
            region,
            endpoint_url,
        }
    }

    /// Generate public URL for S3 object
    ///
    /// For AWS S3, uses the standard format: https://{bucket}.s3.{region}.amazonaws.com/{key}
    /// For S3-compatible providers, uses path-style: {endpoint}/{bucket}/{key}
    fn generate_url(&self, key: &str) -> String {
        let key = encode_key(key);
        if let Some(ref endpoint) = self.endpoint_url {
            let base_url = endpoint.trim_end_matches('/');
            format!("{}/{}/{}", base_url, self.bucket, key)
        } else {
            format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket, self.region, key
            )
        }
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> StorageResult<String> {
        let location = object_path(key)?;
        let size = data.len() as u64;
        let start = std::time::Instant::now();

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        let result: ObjectResult<_> = self
            .store
            .put_opts(&location, PutPayload::from(data), opts)
            .await;

        result.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %self.bucket,
                key = %key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 put failed"
            );
            map_object_store_error(e, key)
        })?;

        let url = self.generate_url(key);

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 put successful"
        );

        Ok(url)
    }

    async fn list(&self) -> StorageResult<Vec<String>> {
        let start = std::time::Instant::now();

        let result: ObjectResult<Vec<String>> = self
            .store
            .list(None)
            .map_ok(|meta| meta.location.to_string())
            .try_collect()
            .await;

        let keys = result.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %self.bucket,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 list failed"
            );
            map_object_store_error(e, "")
        })?;

        tracing::info!(
            bucket = %self.bucket,
            count = keys.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 list successful"
        );

        Ok(keys)
    }

    async fn get(&self, key: &str) -> StorageResult<ByteStream> {
        let location = object_path(key)?;
        let start = std::time::Instant::now();

        let result: ObjectResult<_> = self.store.get_opts(&location, GetOptions::default()).await;

        let result = result.map_err(|e| match e {
            ObjectStoreError::NotFound { .. } => {
                tracing::debug!(bucket = %self.bucket, key = %key, "S3 object not found");
                StorageError::NotFound(key.to_string())
            }
            other => {
                tracing::error!(
                    error = %other,
                    bucket = %self.bucket,
                    key = %key,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 get failed"
                );
                map_object_store_error(other, key)
            }
        })?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            size_bytes = result.meta.size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 get successful"
        );

        let bucket = self.bucket.clone();
        let key = key.to_string();

        let stream = result.into_stream().map(move |res| match res {
            Ok(bytes) => Ok(bytes),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    bucket = %bucket,
                    key = %key,
                    "S3 stream read error"
                );
                Err(map_object_store_error(e, &key))
            }
        });

        Ok(Box::pin(stream))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }
}
