// ============================================================================
// QR Menu Core - User Entity
// File: crates/qrmenu-core/src/domain/user.rs
// ============================================================================

use chrono::{DateTime, Utc};
use qrmenu_shared::constants::ROLE_RESTAURANT_OWNER;
use qrmenu_shared::utils::email_local_part;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// User role. Stored and reported, never used to gate an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    RestaurantOwner,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::RestaurantOwner => ROLE_RESTAURANT_OWNER,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            ROLE_RESTAURANT_OWNER => Some(UserRole::RestaurantOwner),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,

    #[validate(email(message = "Email address is invalid"))]
    pub email: String,

    /// PHC-formatted digest; never leaves the server.
    #[serde(skip_serializing)]
    pub password_hash: String,

    #[validate(length(min = 1, max = 200, message = "Name must be between 1 and 200 characters"))]
    pub name: String,

    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Builds a new owner account. Email is trimmed and lowercased; a missing
    /// or blank name falls back to the email's local part.
    pub fn new(
        email: &str,
        password_hash: String,
        name: Option<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let email = email.trim().to_lowercase();
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| email_local_part(&email).to_string());

        let user = Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            role: UserRole::default(),
            created_at: Utc::now(),
        };

        user.validate()?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_normalizes_email_and_name() {
        let user = User::new("  A@B.com ", "hash".to_string(), None).unwrap();
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.name, "a");
        assert_eq!(user.role, UserRole::RestaurantOwner);

        let named = User::new("a@b.com", "hash".to_string(), Some(" Ana ".to_string())).unwrap();
        assert_eq!(named.name, "Ana");
    }

    #[test]
    fn test_invalid_email_rejected() {
        assert!(User::new("not-an-email", "hash".to_string(), None).is_err());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new("a@b.com", "secret-hash".to_string(), None).unwrap();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["role"], "RESTAURANT_OWNER");
    }
}
