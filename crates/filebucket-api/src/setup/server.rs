//! Listener binding and graceful shutdown

use anyhow::Result;
use axum::Router;
use filebucket_core::Config;
use std::future::Future;
use tokio::net::TcpListener;

/// Bind `0.0.0.0:{PORT}` and serve until SIGINT or SIGTERM.
pub async fn start_server(config: &Config, app: Router) -> Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", config.server_port())).await?;

    tracing::info!(
        addr = %listener.local_addr()?,
        storage_backend = %config.storage_backend(),
        max_file_mb = config.max_file_size_bytes() / 1024 / 1024,
        "Listening"
    );

    serve(listener, app, shutdown_signal()).await
}

/// Serve `app` on `listener`; in-flight requests finish once `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl+C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C"),
        _ = terminate => tracing::info!("Received SIGTERM"),
    }
}
