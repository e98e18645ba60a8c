//! Error types module
//!
//! All request-terminating failures are unified under [`AppError`]. Each variant
//! self-describes how it is presented over HTTP through [`ErrorMetadata`], so the API
//! crate has exactly one place that turns errors into responses.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for client mistakes worth noticing
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "STORAGE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Suggested action for the client
    fn suggested_action(&self) -> Option<&'static str>;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden from clients
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// `size` is a lower bound when the body was cut off at the transport limit.
    #[error("File too large: {size} bytes (max: {max} bytes)")]
    PayloadTooLarge { size: usize, max: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage credentials unavailable: {0}")]
    CredentialsUnavailable(String),

    #[error("Storage backend error: {0}")]
    StorageBackend(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Static metadata for each variant: (http_status, error_code, recoverable, suggested_action, sensitive, log_level).
fn app_error_static_metadata(
    err: &AppError,
) -> (
    u16,
    &'static str,
    bool,
    Option<&'static str>,
    bool,
    LogLevel,
) {
    match err {
        AppError::UnsupportedMediaType(_) => (
            400,
            "UNSUPPORTED_FILE_TYPE",
            false,
            Some("Upload a file with an allowed content type"),
            false,
            LogLevel::Debug,
        ),
        AppError::PayloadTooLarge { .. } => (
            400,
            "FILE_TOO_LARGE",
            false,
            Some("Reduce file size and try again"),
            false,
            LogLevel::Debug,
        ),
        AppError::InvalidInput(_) => (
            400,
            "INVALID_INPUT",
            false,
            Some("Send a multipart form with a single 'file' field"),
            false,
            LogLevel::Warn,
        ),
        AppError::NotFound(_) => (
            404,
            "NOT_FOUND",
            false,
            Some("Verify the file name exists"),
            false,
            LogLevel::Debug,
        ),
        AppError::CredentialsUnavailable(_) => (
            500,
            "STORAGE_CREDENTIALS_UNAVAILABLE",
            false,
            None,
            true,
            LogLevel::Error,
        ),
        AppError::StorageBackend(_) => (
            500,
            "STORAGE_ERROR",
            true,
            Some("Retry after a short delay"),
            true,
            LogLevel::Error,
        ),
        AppError::Internal(_) => (
            500,
            "INTERNAL_ERROR",
            true,
            Some("Retry after a short delay"),
            true,
            LogLevel::Error,
        ),
    }
}

impl AppError {
    /// Get the error type name for detailed error responses and logs
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::UnsupportedMediaType(_) => "UnsupportedMediaType",
            AppError::PayloadTooLarge { .. } => "PayloadTooLarge",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::NotFound(_) => "NotFound",
            AppError::CredentialsUnavailable(_) => "CredentialsUnavailable",
            AppError::StorageBackend(_) => "StorageBackend",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn suggested_action(&self) -> Option<&'static str> {
        app_error_static_metadata(self).3
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).4
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).5
    }

    fn client_message(&self) -> String {
        match self {
            AppError::UnsupportedMediaType(_) => "Unsupported file type.".to_string(),
            AppError::PayloadTooLarge { max, .. } => format!(
                "File size exceeds the maximum limit of {} MB.",
                max / 1024 / 1024
            ),
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::NotFound(_) => "File not found".to_string(),
            AppError::CredentialsUnavailable(_)
            | AppError::StorageBackend(_)
            | AppError::Internal(_) => "Internal Server Error".to_string(),
        }
    }
}
