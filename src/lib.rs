//! SAGA Application Library
//!
//! Hosts the story module, module registration, and the shared server
//! bootstrap used by both the `saga-app` binary and `saga-cli serve`.

pub mod modules;
pub mod utils;

/// Re-export commonly used types
pub use modules::*;

use anyhow::Context;
use saga_kernel::settings::Settings;
use saga_kernel::{InitCtx, ModuleRegistry};

/// Run the SAGA server: telemetry, database, module lifecycle, HTTP.
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    saga_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        "saga-app bootstrap starting"
    );

    let pool = saga_db::connect(&settings.database).await?;
    saga_db::ensure_schema(&pool).await?;

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, &pool);

    let ctx = InitCtx {
        settings: &settings,
        db: &pool,
    };
    registry
        .init_all(&ctx)
        .await
        .with_context(|| "module initialization failed")?;
    registry
        .start_all(&ctx)
        .await
        .with_context(|| "module startup failed")?;

    tracing::info!("saga-app bootstrap complete");

    saga_http::start_server(&registry, &settings).await?;

    registry.stop_all().await
}
