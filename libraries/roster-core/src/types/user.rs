/// User domain type
use crate::error::{Result, RosterError};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// User identifier (`SERIAL` primary key)
pub type UserId = i32;

/// User record as stored in the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct User {
    /// System-generated identifier, never reused
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Email address, unique across all users
    pub email: String,

    /// Creation timestamp, set by the database
    pub created_at: NaiveDateTime,
}

/// Validated input for creating a user
///
/// Both fields are guaranteed to be present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Validate a name/email pair
    ///
    /// Values are kept exactly as given; only emptiness is checked.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let email = email.into();

        if name.is_empty() || email.is_empty() {
            return Err(RosterError::invalid_input("Name and email are required"));
        }

        Ok(Self { name, email })
    }

    /// Build from optional fields, as received in a loosely shaped request body
    pub fn from_parts(name: Option<String>, email: Option<String>) -> Result<Self> {
        match (name, email) {
            (Some(name), Some(email)) => Self::new(name, email),
            _ => Err(RosterError::invalid_input("Name and email are required")),
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address, exactly as submitted
    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_present_fields() {
        let user = NewUser::new("Alice", "alice@example.com").unwrap();
        assert_eq!(user.name(), "Alice");
        assert_eq!(user.email(), "alice@example.com");
    }

    #[test]
    fn rejects_empty_name_or_email() {
        assert!(matches!(
            NewUser::new("", "a@example.com"),
            Err(RosterError::InvalidInput(_))
        ));
        assert!(matches!(
            NewUser::new("Alice", ""),
            Err(RosterError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(NewUser::from_parts(None, Some("a@example.com".into())).is_err());
        assert!(NewUser::from_parts(Some("Alice".into()), None).is_err());
        assert!(NewUser::from_parts(None, None).is_err());
    }

    #[test]
    fn email_case_is_preserved() {
        let user = NewUser::new("Bob", "Bob@Example.COM").unwrap();
        assert_eq!(user.email(), "Bob@Example.COM");
    }

    #[test]
    fn user_serializes_with_snake_case_fields() {
        let created_at = chrono::NaiveDate::from_ymd_opt(2025, 1, 5)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let user = User {
            id: 7,
            name: "Carol".to_string(),
            email: "carol@example.com".to_string(),
            created_at,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["email"], "carol@example.com");
        assert_eq!(json["created_at"], "2025-01-05T12:30:00");
    }
}
