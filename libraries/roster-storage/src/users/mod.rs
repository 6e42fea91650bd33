//! User queries

use crate::StorageError;
use roster_core::types::{NewUser, User, UserId};
use sqlx::PgPool;

type Result<T> = std::result::Result<T, StorageError>;

/// Get all users, most recently created first
pub async fn get_all(pool: &PgPool) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id, name, email, created_at FROM users ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Insert a user and return the stored row
///
/// A duplicate email surfaces as `StorageError::Duplicate`.
pub async fn create(pool: &PgPool, user: &NewUser) -> Result<User> {
    let created = sqlx::query_as::<_, User>(
        "INSERT INTO users (name, email) VALUES ($1, $2)
         RETURNING id, name, email, created_at",
    )
    .bind(user.name())
    .bind(user.email())
    .fetch_one(pool)
    .await?;

    Ok(created)
}

/// Delete a user by id
///
/// Returns `None` when no row matched.
pub async fn delete(pool: &PgPool, id: UserId) -> Result<Option<User>> {
    let deleted = sqlx::query_as::<_, User>(
        "DELETE FROM users WHERE id = $1 RETURNING id, name, email, created_at",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(deleted)
}

/// Count all users
pub async fn count(pool: &PgPool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
