use std::env;
use std::time::Duration;

use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

/// Database settings read from the environment
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (unset: in-memory stores)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - DATABASE_ACQUIRE_TIMEOUT_SECS: pool acquire timeout (default: 30)
/// - DATABASE_MIGRATIONS_PATH: migrations directory applied at start-up (optional)
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub config: DatabaseConfig,
    pub migrations_path: Option<String>,
}

impl DatabaseSettings {
    pub fn from_env() -> anyhow::Result<Option<Self>> {
        let Ok(url) = env::var("DATABASE_URL") else {
            return Ok(None);
        };

        let mut config = DatabaseConfig::new(url);
        if let Ok(raw) = env::var("DATABASE_MAX_CONNECTIONS") {
            let max = raw
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS must be a number, got '{}'", raw))?;
            config = config.with_max_connections(max);
        }
        if let Ok(raw) = env::var("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            let secs = raw.parse().with_context(|| {
                format!("DATABASE_ACQUIRE_TIMEOUT_SECS must be a number, got '{}'", raw)
            })?;
            config = config.with_acquire_timeout(Duration::from_secs(secs));
        }

        Ok(Some(Self {
            config,
            migrations_path: env::var("DATABASE_MIGRATIONS_PATH").ok(),
        }))
    }
}

/// Initialize database connection pool and apply pending migrations
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(&settings.config).await?;

    if let Some(path) = &settings.migrations_path {
        run_migrations(&pool, path).await?;
        tracing::info!(path = %path, "database migrations applied");
    }

    Ok(pool)
}
