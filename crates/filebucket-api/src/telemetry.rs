//! Tracing subscriber setup.

use filebucket_core::LogFormat;
use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const DEFAULT_LOG_FILTER: &str = "filebucket=debug,tower_http=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter. Fails if a subscriber is already installed.
pub fn init_telemetry(format: LogFormat) -> Result<(), anyhow::Error> {
    let registry = tracing_subscriber::registry().with(env_filter());

    match format {
        LogFormat::Compact => {
            // Console: compact format (message string for convenience)
            let console_fmt = tracing_subscriber::fmt::layer().event_format(
                Format::default()
                    .compact()
                    .with_target(false)
                    .without_time(),
            );
            registry.with(console_fmt).try_init()?;
        }
        LogFormat::Json => {
            let json_fmt = tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false);
            registry.with(json_fmt).try_init()?;
        }
    }

    tracing::info!(format = ?format, "Tracing initialized");
    Ok(())
}
