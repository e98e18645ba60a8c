use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A file received from a client, alive for the duration of one request.
///
/// The filename becomes the storage key as-is.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub filename: String,
    pub content_type: String,
    pub data: Bytes,
}

impl UploadRequest {
    pub fn new(filename: impl Into<String>, content_type: impl Into<String>, data: Bytes) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            data,
        }
    }

    /// Byte length of the payload. Reading it does not consume the data.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    #[schema(example = "File uploaded successfully")]
    pub message: String,
    #[schema(example = "https://bucket-for-ai-generated-content.s3.us-east-1.amazonaws.com/report.pdf")]
    pub file_url: String,
}

impl UploadResponse {
    pub fn uploaded(file_url: String) -> Self {
        Self {
            message: "File uploaded successfully".to_string(),
            file_url,
        }
    }
}

/// Point-in-time listing of the keys in the bucket, in backend order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FileListResponse {
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
