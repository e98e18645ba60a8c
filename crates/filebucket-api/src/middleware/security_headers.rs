use axum::http::HeaderValue;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Security headers configuration
#[derive(Clone)]
pub struct SecurityHeadersConfig {
    pub is_production: bool,
}

impl SecurityHeadersConfig {
    pub fn new(is_production: bool) -> Self {
        Self { is_production }
    }
}

/// Security headers middleware
/// Adds security headers to all HTTP responses
pub async fn security_headers_middleware(
    State(config): State<Arc<SecurityHeadersConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();

    // Downloads are served as application/octet-stream; browsers must not sniff them
    headers.insert(
        "X-Content-Type-Options",
        HeaderValue::from_static("nosniff"),
    );

    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));

    headers.insert(
        "Referrer-Policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    // HSTS header (only set in production over HTTPS)
    if config.is_production {
        headers.insert(
            "Strict-Transport-Security",
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        );
    }

    response
}
