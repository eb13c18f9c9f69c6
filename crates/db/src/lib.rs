//! PostgreSQL pool factory and schema bootstrap for SAGA.

use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::{PgPool, PgPoolOptions};

use saga_kernel::settings::DatabaseSettings;

const STORY_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS story (
    id         UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    slug       TEXT NOT NULL UNIQUE,
    title      TEXT NOT NULL,
    image      TEXT NOT NULL,
    category   TEXT NOT NULL,
    synopsis   TEXT NOT NULL,
    author     TEXT NOT NULL,
    content    TEXT NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const STORY_AUTHOR_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS story_author_idx ON story (author)";

/// Build the process-wide connection pool from settings.
///
/// The pool is the single persistence handle; it is cloned into modules at
/// registration time rather than held in any ambient global.
pub async fn connect(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_millis(settings.acquire_timeout_ms))
        .connect(&settings.url)
        .await
        .with_context(|| "failed to connect to PostgreSQL")?;

    tracing::info!(
        target: "saga-db",
        max_connections = settings.max_connections,
        "database pool established"
    );

    Ok(pool)
}

/// Create the story table and its indexes if they do not exist yet.
///
/// The schema is a single table; an idempotent bootstrap at startup stands
/// in for versioned migrations.
pub async fn ensure_schema(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::query(STORY_TABLE)
        .execute(pool)
        .await
        .with_context(|| "failed to create story table")?;

    sqlx::query(STORY_AUTHOR_INDEX)
        .execute(pool)
        .await
        .with_context(|| "failed to create story author index")?;

    tracing::info!(target: "saga-db", "story schema ensured");
    Ok(())
}
