/// Startup schema bootstrap
use sqlx::PgPool;

/// Ensure the users table exists, logging the outcome
///
/// Failure is logged and reported through the return value but never aborts
/// startup: the service keeps serving and requests fail with 500 until the
/// database becomes usable.
// TODO: add a `--strict-startup` flag that exits on bootstrap failure
pub async fn init_database(pool: &PgPool) -> bool {
    tracing::info!("Connecting to PostgreSQL");

    if let Err(e) = roster_storage::ensure_schema(pool).await {
        tracing::error!("Error initializing database: {}", e);
        return false;
    }
    tracing::info!("Table \"users\" is ready");

    match roster_storage::users::count(pool).await {
        Ok(count) => tracing::info!("Current users in database: {}", count),
        Err(e) => tracing::warn!("Could not count users: {}", e),
    }

    tracing::info!("Database initialization completed");
    true
}
