//! Configuration module
//!
//! Configuration is read once at startup from the process environment (after loading
//! an optional `.env` file). Parsing goes through [`Config::from_lookup`] so the rules
//! can be exercised without touching the real environment.

use std::env;
use std::str::FromStr;

use crate::storage_types::StorageBackend;

const SERVER_PORT: u16 = 8000;
const HTTP_CONCURRENCY_LIMIT: usize = 10_000;
const MAX_FILE_SIZE_MB: usize = 5;
const DEFAULT_S3_BUCKET: &str = "bucket-for-ai-generated-content";
const DEFAULT_S3_REGION: &str = "us-east-1";
const DEFAULT_ALLOWED_CONTENT_TYPES: &str = "image/jpeg,image/png,application/pdf";

/// Console log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(anyhow::anyhow!("Invalid log format: {}", s)),
        }
    }
}

/// Server-level settings
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub log_format: LogFormat,
    pub http_concurrency_limit: usize,
}

/// Storage backend selection and connection settings
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub s3_bucket: String,
    pub s3_region: String,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, Spaces, ...)
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
}

/// Upload validation limits
#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub max_file_size_bytes: usize,
    pub allowed_content_types: Vec<String>,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub base: BaseConfig,
    pub storage: StorageConfig,
    pub upload: UploadConfig,
}

fn split_list(raw: &str, lowercase: bool) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            if lowercase {
                s.to_lowercase()
            } else {
                s.to_string()
            }
        })
        .collect()
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins_str = lookup("CORS_ORIGINS").unwrap_or_else(|| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::Compact,
        };

        let base = BaseConfig {
            server_port: lookup("PORT")
                .unwrap_or_else(|| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins: split_list(&cors_origins_str, false),
            environment,
            log_format,
            http_concurrency_limit: match lookup("HTTP_CONCURRENCY_LIMIT") {
                Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                    anyhow::anyhow!("HTTP_CONCURRENCY_LIMIT must be a valid number")
                })?,
                None => HTTP_CONCURRENCY_LIMIT,
            }
            .max(1),
        };

        let backend = match lookup("STORAGE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => StorageBackend::S3,
        };

        let storage = StorageConfig {
            backend,
            s3_bucket: lookup("S3_BUCKET").unwrap_or_else(|| DEFAULT_S3_BUCKET.to_string()),
            s3_region: lookup("S3_REGION")
                .or_else(|| lookup("AWS_REGION"))
                .unwrap_or_else(|| DEFAULT_S3_REGION.to_string()),
            s3_endpoint: lookup("S3_ENDPOINT").filter(|s| !s.is_empty()),
            local_storage_path: lookup("LOCAL_STORAGE_PATH").filter(|s| !s.is_empty()),
            local_storage_base_url: lookup("LOCAL_STORAGE_BASE_URL").filter(|s| !s.is_empty()),
        };

        let max_file_size_mb = match lookup("MAX_FILE_SIZE_MB") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| anyhow::anyhow!("MAX_FILE_SIZE_MB must be a valid number"))?,
            None => MAX_FILE_SIZE_MB,
        };
        let max_file_size_bytes = max_file_size_mb
            .checked_mul(1024 * 1024)
            .ok_or_else(|| anyhow::anyhow!("MAX_FILE_SIZE_MB is too large"))?;

        let upload = UploadConfig {
            max_file_size_bytes,
            allowed_content_types: split_list(
                &lookup("ALLOWED_CONTENT_TYPES")
                    .unwrap_or_else(|| DEFAULT_ALLOWED_CONTENT_TYPES.to_string()),
                true,
            ),
        };

        let config = Config {
            base,
            storage,
            upload,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.upload.allowed_content_types.is_empty() {
            return Err(anyhow::anyhow!(
                "ALLOWED_CONTENT_TYPES must list at least one content type"
            ));
        }

        if self.upload.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than zero"));
        }

        match self.storage.backend {
            StorageBackend::S3 => {
                if self.storage.s3_bucket.trim().is_empty() {
                    return Err(anyhow::anyhow!(
                        "S3_BUCKET must not be empty when using S3 storage backend"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.storage.local_storage_path.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH must be set when using local storage backend"
                    ));
                }
                if self.storage.local_storage_base_url.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_BASE_URL must be set when using local storage backend"
                    ));
                }
            }
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.base.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.base.environment
    }

    pub fn log_format(&self) -> LogFormat {
        self.base.log_format
    }

    pub fn http_concurrency_limit(&self) -> usize {
        self.base.http_concurrency_limit
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.storage.backend
    }

    pub fn s3_bucket(&self) -> &str {
        &self.storage.s3_bucket
    }

    pub fn s3_region(&self) -> &str {
        &self.storage.s3_region
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.storage.s3_endpoint.as_deref()
    }

    pub fn local_storage_path(&self) -> Option<&str> {
        self.storage.local_storage_path.as_deref()
    }

    pub fn local_storage_base_url(&self) -> Option<&str> {
        self.storage.local_storage_base_url.as_deref()
    }

    pub fn max_file_size_bytes(&self) -> usize {
        self.upload.max_file_size_bytes
    }

    pub fn allowed_content_types(&self) -> &[String] {
        &self.upload.allowed_content_types
    }
}
