//! Storage trait for the users table

use crate::error::Result;
use crate::types::{NewUser, User, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Storage handle passed to request handlers
///
/// Implemented by the PostgreSQL context in `roster-storage` and by in-memory
/// doubles in tests.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Round-trip to the database, returning its current time
    async fn ping(&self) -> Result<DateTime<Utc>>;

    /// All users, most recently created first
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Insert a user
    ///
    /// Fails with `RosterError::Duplicate` when the email already exists.
    async fn create_user(&self, user: NewUser) -> Result<User>;

    /// Delete a user, returning the removed record if there was one
    async fn delete_user(&self, id: UserId) -> Result<Option<User>>;

    /// Release pooled resources; called once on shutdown
    async fn close(&self) {}
}
