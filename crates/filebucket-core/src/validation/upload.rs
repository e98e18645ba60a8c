use crate::error::AppError;
use crate::models::UploadRequest;

/// Upload validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Unsupported content type: {content_type} (allowed: {allowed:?})")]
    UnsupportedContentType {
        content_type: String,
        allowed: Vec<String>,
    },

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::UnsupportedContentType { content_type, .. } => {
                AppError::UnsupportedMediaType(content_type)
            }
            ValidationError::FileTooLarge { size, max } => AppError::PayloadTooLarge { size, max },
        }
    }
}

/// Normalize MIME type by stripping parameters (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
pub fn normalize_mime_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
        .to_lowercase()
}

/// Rejects uploads before they reach storage.
///
/// Only the declared content type is checked; the bytes are never sniffed, so a
/// mislabeled file passes. The size ceiling is inclusive.
#[derive(Debug, Clone)]
pub struct UploadValidator {
    max_file_size: usize,
    allowed_content_types: Vec<String>,
}

impl UploadValidator {
    pub fn new(max_file_size: usize, allowed_content_types: Vec<String>) -> Self {
        Self {
            max_file_size,
            allowed_content_types: allowed_content_types
                .iter()
                .map(|ct| normalize_mime_type(ct))
                .collect(),
        }
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    pub fn allowed_content_types(&self) -> &[String] {
        &self.allowed_content_types
    }

    /// Validate content type against the allow-list
    pub fn validate_content_type(&self, content_type: &str) -> Result<(), ValidationError> {
        let normalized = normalize_mime_type(content_type);

        if !self.allowed_content_types.iter().any(|ct| ct == &normalized) {
            return Err(ValidationError::UnsupportedContentType {
                content_type: content_type.to_string(),
                allowed: self.allowed_content_types.clone(),
            });
        }

        Ok(())
    }

    /// Validate file size
    pub fn validate_file_size(&self, size: usize) -> Result<(), ValidationError> {
        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }

    /// Validate an upload, stopping at the first failure.
    pub fn validate(&self, upload: &UploadRequest) -> Result<(), ValidationError> {
        let result = self
            .validate_content_type(&upload.content_type)
            .and_then(|_| self.validate_file_size(upload.size()));

        match &result {
            Ok(()) => tracing::debug!(
                filename = %upload.filename,
                content_type = %upload.content_type,
                size_bytes = upload.size(),
                "File passed validation"
            ),
            Err(e) => tracing::debug!(
                filename = %upload.filename,
                error = %e,
                "File failed validation"
            ),
        }

        result
    }
}
