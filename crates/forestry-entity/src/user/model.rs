//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// Prefix every bcrypt hash variant starts with (`$2a$`, `$2b$`, `$2y$`).
/// Stored values without it are legacy plaintext awaiting migration.
pub const BCRYPT_PREFIX: &str = "$2";

/// A registered user of the inventory system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Login email, unique across all users.
    pub email: String,
    /// bcrypt password hash (plaintext only in pre-migration legacy rows).
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Full display name.
    pub full_name: String,
    /// Assigned role.
    pub role: UserRole,
    /// Whether the account may log in.
    pub active: bool,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Organization the user belongs to.
    pub organization: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// Last successful login time.
    pub last_access_at: Option<DateTime<Utc>>,
}

impl User {
    /// Whether the stored credential is a bcrypt hash rather than legacy
    /// plaintext.
    pub fn has_hashed_password(&self) -> bool {
        self.password_hash.starts_with(BCRYPT_PREFIX)
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Login email.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Full display name.
    pub full_name: String,
    /// Assigned role.
    pub role: UserRole,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Organization.
    pub organization: Option<String>,
}

/// Data for updating an existing user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// The user ID to update.
    pub id: Uuid,
    /// New full name.
    pub full_name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New organization.
    pub organization: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_hash(hash: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: "tech@example.com".to_string(),
            password_hash: hash.to_string(),
            full_name: "Test Technician".to_string(),
            role: UserRole::ForestTechnician,
            active: true,
            phone: None,
            organization: None,
            created_at: Utc::now(),
            last_access_at: None,
        }
    }

    #[test]
    fn detects_bcrypt_hash_prefix() {
        assert!(user_with_hash("$2b$12$abcdefghijklmnopqrstuv").has_hashed_password());
        assert!(user_with_hash("$2a$10$xyz").has_hashed_password());
        assert!(!user_with_hash("plaintext-password").has_hashed_password());
    }

    #[test]
    fn serialization_never_includes_password_hash() {
        let user = user_with_hash("$2b$12$abcdefghijklmnopqrstuv");
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json.get("email").unwrap(), "tech@example.com");
    }
}
