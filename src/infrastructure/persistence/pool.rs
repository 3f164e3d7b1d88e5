//! Connection pool setup and backend selection.
//!
//! The backend is picked from the database URL scheme. Each backend gets its
//! own sqlx pool, the `students` table is created if missing, and the caller
//! receives the repository behind the [`StudentRepository`] trait.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::Config;
use crate::domain::repositories::StudentRepository;
use crate::infrastructure::persistence::{PgStudentRepository, SqliteStudentRepository};

/// Storage engines the service can run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    Postgres,
    Sqlite,
}

impl DatabaseBackend {
    /// Detects the backend from a connection string; `None` if unsupported.
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(Self::Postgres)
        } else if url.starts_with("sqlite:") {
            Some(Self::Sqlite)
        } else {
            None
        }
    }
}

/// Returns true for SQLite URLs that live only as long as their connection.
fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Connects to the configured database and returns a ready repository.
///
/// # Errors
///
/// Returns an error if the URL scheme is unsupported, the pool cannot be
/// created, or the schema bootstrap fails.
pub async fn connect(config: &Config) -> Result<Arc<dyn StudentRepository>> {
    let backend = DatabaseBackend::from_url(&config.database_url)
        .context("Unsupported DATABASE_URL scheme")?;

    let repository: Arc<dyn StudentRepository> = match backend {
        DatabaseBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Some(Duration::from_secs(config.db_idle_timeout)))
                .max_lifetime(Some(Duration::from_secs(config.db_max_lifetime)))
                .connect(&config.database_url)
                .await
                .context("Failed to connect to PostgreSQL")?;

            let repository = PgStudentRepository::new(Arc::new(pool));
            repository
                .init_schema()
                .await
                .context("Failed to create students table")?;
            Arc::new(repository)
        }
        DatabaseBackend::Sqlite => {
            let options = SqliteConnectOptions::from_str(&config.database_url)
                .context("Invalid SQLite connection string")?
                .create_if_missing(true);

            // An in-memory database disappears with its connection, so keep
            // exactly one and never recycle it.
            let pool_options = if is_in_memory(&config.database_url) {
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .idle_timeout(None::<Duration>)
                    .max_lifetime(None::<Duration>)
            } else {
                SqlitePoolOptions::new()
                    .max_connections(config.db_max_connections)
                    .idle_timeout(Some(Duration::from_secs(config.db_idle_timeout)))
                    .max_lifetime(Some(Duration::from_secs(config.db_max_lifetime)))
            };

            let pool = pool_options
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect_with(options)
                .await
                .context("Failed to open SQLite database")?;

            let repository = SqliteStudentRepository::new(Arc::new(pool));
            repository
                .init_schema()
                .await
                .context("Failed to create students table")?;
            Arc::new(repository)
        }
    };

    tracing::info!(?backend, "Connected to database");
    Ok(repository)
}
