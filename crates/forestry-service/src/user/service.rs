//! Administrator-facing user management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use forestry_auth::password::PasswordHasher;
use forestry_core::error::AppError;
use forestry_core::sanitize::mask_email;
use forestry_database::repositories::user::UserRepository;
use forestry_entity::user::model::{CreateUser, UpdateUser};
use forestry_entity::user::{User, UserRole};

/// Data for an admin-created account.
#[derive(Debug, Clone)]
pub struct CreateUserData {
    /// Login email.
    pub email: String,
    /// Initial plaintext password.
    pub password: String,
    /// Full display name.
    pub full_name: String,
    /// Assigned role.
    pub role: UserRole,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Organization.
    pub organization: Option<String>,
}

/// Handles administrator user management.
#[derive(Debug, Clone)]
pub struct UserService {
    user_repo: Arc<UserRepository>,
    hasher: PasswordHasher,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>, hasher: PasswordHasher) -> Self {
        Self { user_repo, hasher }
    }

    /// Lists all users.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.user_repo.find_all().await
    }

    /// Fetches a user by ID.
    pub async fn get(&self, id: Uuid) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// Creates a user on behalf of an administrator.
    pub async fn create(&self, data: CreateUserData) -> Result<User, AppError> {
        let password_hash = self.hasher.hash_password(&data.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                email: data.email,
                password_hash,
                full_name: data.full_name,
                role: data.role,
                phone: data.phone,
                organization: data.organization,
            })
            .await?;

        info!(email = %mask_email(&user.email), role = %user.role, "User created by admin");
        Ok(user)
    }

    /// Updates a user's profile fields.
    pub async fn update(&self, data: UpdateUser) -> Result<User, AppError> {
        let user = self.user_repo.update(&data).await?;
        info!(user_id = %user.id, "User profile updated");
        Ok(user)
    }

    /// Activates or deactivates an account.
    pub async fn set_active(&self, id: Uuid, active: bool) -> Result<User, AppError> {
        let user = self.user_repo.set_active(id, active).await?;
        info!(user_id = %user.id, active, "User status changed");
        Ok(user)
    }

    /// Deletes a user.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.user_repo.delete(id).await? {
            return Err(AppError::not_found(format!("User {id} not found")));
        }
        info!(user_id = %id, "User deleted");
        Ok(())
    }
}
