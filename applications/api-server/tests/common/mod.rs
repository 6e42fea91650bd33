//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use roster_api::{create_router, AppState};
use roster_core::{NewUser, Result, RosterError, User, UserId, UserStore};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use tower::util::ServiceExt;

/// In-memory `UserStore` with the same constraints as the users table
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
    next_id: Mutex<UserId>,
    failure: Mutex<Option<String>>,
    calls: AtomicUsize,
}

impl MemoryUserStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every subsequent call fail with the given storage message
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// Number of storage calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn enter(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(RosterError::storage(message.clone())),
            None => Ok(()),
        }
    }
}

fn epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn ping(&self) -> Result<DateTime<Utc>> {
        self.enter()?;
        Ok(Utc::now())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.enter()?;
        let mut users = self.users.lock().unwrap().clone();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(users)
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        self.enter()?;
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email()) {
            return Err(RosterError::duplicate(
                "duplicate key value violates unique constraint \"users_email_key\"",
            ));
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let id = *next_id;

        let created = User {
            id,
            name: user.name().to_string(),
            email: user.email().to_string(),
            created_at: epoch() + Duration::seconds(i64::from(id)),
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn delete_user(&self, id: UserId) -> Result<Option<User>> {
        self.enter()?;
        let mut users = self.users.lock().unwrap();
        let position = users.iter().position(|u| u.id == id);
        Ok(position.map(|i| users.remove(i)))
    }
}

/// Router wired to the given store
pub fn create_test_app(store: Arc<dyn UserStore>) -> Router {
    create_router(AppState::new(store))
}

/// Send a request and decode the JSON response body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}
