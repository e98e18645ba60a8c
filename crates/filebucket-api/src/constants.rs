//! API constants

/// Path of the generated OpenAPI document
pub const OPENAPI_PATH: &str = "/api/openapi.json";

/// Path the RapiDoc viewer is served from
pub const DOCS_PATH: &str = "/docs";

/// Slack on top of the file ceiling for multipart boundaries and part headers.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Name of the multipart field carrying the upload
pub const UPLOAD_FIELD_NAME: &str = "file";

/// Greeting returned by `GET /`
pub const WELCOME_MESSAGE: &str = "Welcome to the Filebucket API";
