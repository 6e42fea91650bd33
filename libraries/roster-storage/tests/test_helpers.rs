#![cfg(feature = "testcontainers")]

//! Test helpers for storage integration tests
//!
//! Each `TestDb` runs a disposable PostgreSQL container so constraints and
//! ordering are exercised against the real engine.

use roster_storage::DatabaseConfig;
use sqlx::PgPool;
use std::time::Duration;
use testcontainers::{
    core::{IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};

/// Test database wrapper; the container is removed on drop
pub struct TestDb {
    pub pool: PgPool,
    _container: ContainerAsync<GenericImage>,
}

impl TestDb {
    /// Start PostgreSQL and bootstrap the schema
    pub async fn new() -> Self {
        let container = GenericImage::new("postgres", "16-alpine")
            .with_exposed_port(5432.tcp())
            .with_wait_for(WaitFor::message_on_stderr(
                "database system is ready to accept connections",
            ))
            .with_env_var("POSTGRES_PASSWORD", "postgres")
            .start()
            .await
            .expect("Failed to start postgres container");

        let port = container
            .get_host_port_ipv4(5432.tcp())
            .await
            .expect("Failed to resolve mapped port");

        let config = DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port,
            password: "postgres".to_string(),
            ssl_mode: "disable".to_string(),
            ..DatabaseConfig::default()
        };

        let pool = roster_storage::create_pool(&config).expect("Failed to create pool");

        // The image restarts once after initdb; retry until the final server is up
        let mut attempts = 0;
        loop {
            match roster_storage::ensure_schema(&pool).await {
                Ok(()) => break,
                Err(e) if attempts < 30 => {
                    attempts += 1;
                    eprintln!("waiting for postgres: {e}");
                    tokio::time::sleep(Duration::from_millis(500)).await;
                }
                Err(e) => panic!("Failed to bootstrap schema: {e}"),
            }
        }

        Self {
            pool,
            _container: container,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
