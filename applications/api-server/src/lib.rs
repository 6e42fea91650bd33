//! Roster API Library
//!
//! REST service exposing health checks and user CRUD over a PostgreSQL table.
//!
//! This library exposes the router and its components so they can be driven
//! directly from tests.

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod router;
pub mod state;

// Re-export commonly used types for convenience
pub use bootstrap::init_database;
pub use config::ServerConfig;
pub use error::{ApiError, Result};
pub use router::create_router;
pub use state::AppState;
