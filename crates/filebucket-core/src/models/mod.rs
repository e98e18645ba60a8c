//! Request and response models shared between the gateway and the HTTP layer.

pub mod file;

pub use file::{FileListResponse, MessageResponse, UploadRequest, UploadResponse};
