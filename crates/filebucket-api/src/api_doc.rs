//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use filebucket_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Filebucket API",
        version = "0.1.0",
        description = "Upload, list, and download files kept in a single object storage bucket. Uploads are restricted to an allow-list of content types and a maximum size."
    ),
    paths(
        handlers::root::root,
        handlers::root::liveness_check,
        handlers::upload::upload_file,
        handlers::files::list_files,
        handlers::files::get_file,
    ),
    components(schemas(
        models::UploadResponse,
        models::FileListResponse,
        models::MessageResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "files", description = "File upload, listing, and download"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Returns the OpenAPI spec served at `/api/openapi.json`.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
