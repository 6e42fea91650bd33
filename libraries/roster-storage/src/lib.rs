//! Roster Storage
//!
//! PostgreSQL database layer for the Roster API service.
//!
//! # Architecture
//!
//! - **Lazy pool**: the pool is built without connecting, so the service can
//!   start while the database is still unreachable
//! - **Vertical Slicing**: the `users` module owns its own queries
//! - **Bootstrap, not migrations**: `ensure_schema` creates the table if it is
//!   missing and is safe to run on every startup
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_storage::{create_pool, ensure_schema, DatabaseConfig, PgStorageContext};
//! use roster_core::UserStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool(&DatabaseConfig::default())?;
//! ensure_schema(&pool).await?;
//!
//! let storage = PgStorageContext::new(pool);
//! let users = storage.list_users().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod context;
mod error;

// Vertical slices
pub mod users;

pub use config::DatabaseConfig;
pub use context::PgStorageContext;
pub use error::StorageError;

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use std::str::FromStr;
use std::time::Duration;

/// Embedded schema, applied idempotently at startup
const SCHEMA: &[&str] = &[include_str!("../migrations/0001_create_users.sql")];

/// Create a new PostgreSQL pool
///
/// No connection is opened here; connections are established on first use.
///
/// # Errors
///
/// Returns an error if the configured SSL mode is not recognised
pub fn create_pool(config: &DatabaseConfig) -> Result<PgPool, StorageError> {
    let ssl_mode = PgSslMode::from_str(&config.ssl_mode)
        .map_err(|e| StorageError::Connection(format!("invalid ssl mode: {}", e)))?;

    let mut options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.name)
        .username(&config.user)
        .ssl_mode(ssl_mode);

    if !config.password.is_empty() {
        options = options.password(&config.password);
    }

    tracing::debug!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        ssl_mode = %config.ssl_mode,
        "Creating PostgreSQL pool"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_lazy_with(options);

    Ok(pool)
}

/// Ensure the `users` table exists
///
/// Safe to call on every startup.
///
/// # Errors
///
/// Returns an error if the database is unreachable or the DDL fails
pub async fn ensure_schema(pool: &PgPool) -> Result<(), StorageError> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| StorageError::Schema(e.to_string()))?;
    }

    Ok(())
}

/// Trivial round-trip query returning the database's current time
pub async fn ping(pool: &PgPool) -> Result<DateTime<Utc>, StorageError> {
    let now: DateTime<Utc> = sqlx::query_scalar("SELECT NOW()").fetch_one(pool).await?;
    Ok(now)
}
