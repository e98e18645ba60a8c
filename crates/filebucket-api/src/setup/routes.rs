//! Route configuration and setup

use crate::constants::{DOCS_PATH, OPENAPI_PATH};
use crate::handlers;
use crate::middleware::{
    request_id_middleware, security_headers_middleware, SecurityHeadersConfig,
};
use crate::state::AppState;
use crate::utils::upload::request_body_limit;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use filebucket_core::Config;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let security_headers_config = Arc::new(SecurityHeadersConfig::new(config.is_production()));

    // Server-level concurrency limit to protect against resource exhaustion under extreme load
    let http_concurrency_limit = config.http_concurrency_limit();
    tracing::info!(
        http_concurrency_limit = http_concurrency_limit,
        "HTTP concurrency limit layer enabled"
    );

    let body_limit = request_body_limit(config.max_file_size_bytes());

    let app = Router::new()
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::root::liveness_check))
        .route("/upload", post(handlers::upload::upload_file))
        .route("/files", get(handlers::files::list_files))
        .route("/files/{*name}", get(handlers::files::get_file))
        .route(
            OPENAPI_PATH,
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
        .merge(utoipa_rapidoc::RapiDoc::new(OPENAPI_PATH).path(DOCS_PATH))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(axum::middleware::from_fn_with_state(
            security_headers_config,
            security_headers_middleware,
        ))
        .with_state(state);

    Ok(app)
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    let cors = if config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins()
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any)
    };
    Ok(cors)
}
