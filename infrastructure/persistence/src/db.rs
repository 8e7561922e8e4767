use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use std::{path::Path, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the database connection
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// Server-side `statement_timeout`; Postgres rolls back a statement that
    /// exceeds it, so a timed-out write never commits.
    pub statement_timeout: Option<Duration>,
}

impl DatabaseConfig {
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
    pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a new database configuration with default pool limits
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: Self::DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Self::DEFAULT_ACQUIRE_TIMEOUT,
            statement_timeout: None,
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_acquire_timeout(mut self, acquire_timeout: Duration) -> Self {
        self.acquire_timeout = acquire_timeout;
        self
    }

    pub fn with_statement_timeout(mut self, statement_timeout: Duration) -> Self {
        self.statement_timeout = Some(statement_timeout);
        self
    }

    /// Connection options with the session settings applied
    pub fn connect_options(&self) -> Result<PgConnectOptions, DatabaseError> {
        let options = PgConnectOptions::from_str(&self.connection_string).map_err(|e| {
            tracing::error!(error = %e, "invalid postgres connection string");
            DatabaseError::ConnectionError
        })?;

        Ok(match self.statement_timeout {
            Some(limit) => {
                options.options([("statement_timeout", format!("{}ms", limit.as_millis()))])
            }
            None => options,
        })
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(config.connect_options()?)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to connect to postgres");
            DatabaseError::ConnectionError
        })?;

    Ok(pool)
}

/// Runs database migrations from the specified directory
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);

    if !path.exists() {
        tracing::error!(path = migrations_path, "migrations directory not found");
        return Err(DatabaseError::MigrationError);
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|_| DatabaseError::MigrationError)?
        .run(pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to apply migrations");
            DatabaseError::MigrationError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_apply_default_pool_limits() {
        let config = DatabaseConfig::new("postgres://localhost/inventory".to_string());
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
        assert_eq!(config.statement_timeout, None);
    }

    #[test]
    fn should_override_pool_limits() {
        let config = DatabaseConfig::new("postgres://localhost/inventory".to_string())
            .with_max_connections(12)
            .with_acquire_timeout(Duration::from_secs(3));
        assert_eq!(config.max_connections, 12);
        assert_eq!(config.acquire_timeout, Duration::from_secs(3));
    }

    #[test]
    fn should_set_statement_timeout_on_connections() {
        let config = DatabaseConfig::new("postgres://localhost/inventory".to_string())
            .with_statement_timeout(Duration::from_millis(1500));

        let options = config.connect_options().unwrap();

        assert_eq!(config.statement_timeout, Some(Duration::from_millis(1500)));
        assert_eq!(options.get_database(), Some("inventory"));
        assert!(
            options
                .get_options()
                .is_some_and(|o| o.contains("statement_timeout=1500ms"))
        );
    }

    #[test]
    fn should_reject_malformed_connection_string() {
        let config = DatabaseConfig::new("not a url".to_string());
        assert!(matches!(
            config.connect_options(),
            Err(DatabaseError::ConnectionError)
        ));
    }

    #[tokio::test]
    async fn should_fail_migrations_when_directory_missing() {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/inventory")
            .unwrap();
        let result = run_migrations(&pool, "/definitely/not/a/migrations/dir").await;
        assert!(matches!(result, Err(DatabaseError::MigrationError)));
    }
}
