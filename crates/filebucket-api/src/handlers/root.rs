//! Welcome and liveness handlers.

use crate::constants::WELCOME_MESSAGE;
use axum::{http::StatusCode, response::IntoResponse, Json};
use filebucket_core::models::MessageResponse;

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse)
    )
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

/// Liveness check - process is running.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Process is alive")
    )
)]
pub async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}
