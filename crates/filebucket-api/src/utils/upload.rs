//! Common utilities for file upload handlers

use crate::constants::{MULTIPART_OVERHEAD_BYTES, UPLOAD_FIELD_NAME};
use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use filebucket_core::models::UploadRequest;
use filebucket_core::AppError;

/// Content type assumed when the file part does not declare one.
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Largest request body accepted for a file ceiling of `max_file_size` bytes.
///
/// Bodies just over the ceiling still reach the validator so it can answer 400.
pub fn request_body_limit(max_file_size: usize) -> usize {
    max_file_size + MULTIPART_OVERHEAD_BYTES
}

/// A body cut off at the transport limit is a file over the ceiling, reported
/// exactly like one the validator rejects.
fn multipart_error(err: MultipartError, context: &str, max_file_size: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge {
            size: request_body_limit(max_file_size),
            max: max_file_size,
        }
    } else {
        AppError::InvalidInput(format!("{}: {}", context, err))
    }
}

/// Extract file data, filename, and content type from multipart form.
/// Only one field named "file" is accepted; multiple file fields are rejected.
/// Other fields are drained and ignored.
pub async fn extract_multipart_file(
    mut multipart: Multipart,
    max_file_size: usize,
) -> Result<UploadRequest, AppError> {
    let mut upload: Option<UploadRequest> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, "Failed to read multipart", max_file_size))?
    {
        if field.name() != Some(UPLOAD_FIELD_NAME) {
            continue;
        }

        if upload.is_some() {
            return Err(AppError::InvalidInput(
                "Multiple file fields are not allowed; send exactly one field named 'file'"
                    .to_string(),
            ));
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::InvalidInput("No filename provided".to_string()))?;
        let content_type = field
            .content_type()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, "Failed to read file data", max_file_size))?;

        upload = Some(UploadRequest::new(filename, content_type, data));
    }

    upload.ok_or_else(|| AppError::InvalidInput("No file provided".to_string()))
}
