//! Logging and tracing bootstrap for SAGA.

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

use saga_kernel::settings::{LogFormat, TelemetrySettings};

/// Initialize the process-wide tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter directive.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let directive = settings.filter.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match settings.log_format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow!("failed to initialize tracing subscriber: {e}"))?;

    tracing::debug!(
        target: "saga-telemetry",
        format = ?settings.log_format,
        "tracing subscriber initialized"
    );
    Ok(())
}
