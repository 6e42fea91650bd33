//! Roster Core
//!
//! Platform-agnostic domain types, the storage trait and error handling shared
//! by the Roster services.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `NewUser`, `UserId`
//! - **Core Traits**: `UserStore`, implemented by `roster-storage` and by test doubles
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::NewUser;
//!
//! let user = NewUser::new("Alice", "alice@example.com").unwrap();
//! assert_eq!(user.email(), "alice@example.com");
//!
//! assert!(NewUser::new("", "nobody@example.com").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use storage::UserStore;
pub use types::{NewUser, User, UserId};
