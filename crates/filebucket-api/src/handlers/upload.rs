use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_multipart_file;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use filebucket_core::models::UploadResponse;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/upload",
    tag = "files",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File uploaded successfully", body = UploadResponse),
        (status = 400, description = "Unsupported file type, file too large, or malformed form", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let upload = extract_multipart_file(multipart?, state.validator.max_file_size()).await?;

    state.validator.validate(&upload)?;

    let size = upload.size();
    let file_url = state
        .storage
        .put(&upload.filename, upload.data, &upload.content_type)
        .await?;

    tracing::info!(
        filename = %upload.filename,
        content_type = %upload.content_type,
        size_bytes = size,
        file_url = %file_url,
        "File uploaded"
    );

    Ok(Json(UploadResponse::uploaded(file_url)))
}
