//! Filebucket API Library
//!
//! This crate provides the HTTP handlers, middleware, and application setup for
//! the upload/list/get file API.

// Module declarations
mod api_doc;
pub mod constants;
mod handlers;
mod middleware;
pub mod setup;
mod telemetry;
mod utils;

// Public modules
pub mod error;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
