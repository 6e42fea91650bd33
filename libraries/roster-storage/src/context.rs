use crate::users;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use roster_core::{
    error::Result,
    storage::UserStore,
    types::{NewUser, User, UserId},
};
use sqlx::PgPool;

/// Storage context backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgStorageContext {
    pool: PgPool,
}

impl PgStorageContext {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgStorageContext {
    async fn ping(&self) -> Result<DateTime<Utc>> {
        Ok(crate::ping(&self.pool).await?)
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(users::get_all(&self.pool).await?)
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        Ok(users::create(&self.pool, &user).await?)
    }

    async fn delete_user(&self, id: UserId) -> Result<Option<User>> {
        Ok(users::delete(&self.pool, id).await?)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
