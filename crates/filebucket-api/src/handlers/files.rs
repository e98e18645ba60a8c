use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::Response,
    Json,
};
use filebucket_core::models::FileListResponse;
use filebucket_core::AppError;
use futures::TryStreamExt;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/files",
    tag = "files",
    responses(
        (status = 200, description = "Every key in the bucket, in backend order", body = FileListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FileListResponse>, HttpAppError> {
    let files = state.storage.list().await?;
    Ok(Json(FileListResponse { files }))
}

/// `Content-Disposition` for a download named after the last key segment.
fn content_disposition(key: &str) -> HeaderValue {
    let filename = key.rsplit('/').next().unwrap_or(key).replace('"', "\\\"");
    HeaderValue::from_str(&format!("attachment; filename=\"{}\"", filename))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}

#[utoipa::path(
    get,
    path = "/files/{name}",
    tag = "files",
    params(
        ("name" = String, Path, description = "Key of the file, as given at upload")
    ),
    responses(
        (status = 200, description = "Raw file content", content_type = "application/octet-stream"),
        (status = 400, description = "Invalid file name", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_file(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, HttpAppError> {
    let stream = state.storage.get(&name).await?;

    tracing::debug!(key = %name, "Streaming file from storage");

    let key = name.clone();
    let body_stream = stream.map_err(move |e| {
        tracing::error!(error = %e, key = %key, "Storage stream error");
        std::io::Error::other(format!("Storage stream error: {}", e))
    });

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(header::CONTENT_DISPOSITION, content_disposition(&name))
        .body(Body::from_stream(body_stream))
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to build response");
            AppError::Internal(e.to_string())
        })?;

    Ok(response)
}
