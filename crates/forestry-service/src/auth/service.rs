//! Login, registration, and password-change orchestration.

use std::sync::Arc;

use tracing::{info, warn};

use forestry_auth::jwt::TokenIssuer;
use forestry_auth::jwt::encoder::IssuedToken;
use forestry_auth::password::PasswordHasher;
use forestry_core::config::auth::AuthConfig;
use forestry_core::error::AppError;
use forestry_core::sanitize::mask_email;
use forestry_database::repositories::user::UserRepository;
use forestry_entity::user::model::CreateUser;
use forestry_entity::user::{User, UserRole};
use uuid::Uuid;

/// Result of a successful login or registration.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    /// The authenticated user.
    pub user: User,
    /// The freshly issued session token.
    pub token: IssuedToken,
}

/// Data required to register a new account.
#[derive(Debug, Clone)]
pub struct RegisterData {
    /// Login email.
    pub email: String,
    /// Plaintext password (hashed before it ever leaves this service).
    pub password: String,
    /// Full display name.
    pub full_name: String,
    /// Role, already parsed at the API edge (parsing fails closed there).
    pub role: UserRole,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Organization.
    pub organization: Option<String>,
}

/// Orchestrates login, registration, and password changes.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: PasswordHasher,
    /// Token issuer.
    issuer: Arc<TokenIssuer>,
    /// Minimum accepted password length.
    password_min_length: usize,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: PasswordHasher,
        issuer: Arc<TokenIssuer>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            issuer,
            password_min_length: config.password_min_length,
        }
    }

    /// Performs the login flow:
    ///
    /// 1. Look up the user by email
    /// 2. Verify the password
    /// 3. Check the account is active
    /// 4. Record the access time
    /// 5. Issue a session token
    ///
    /// Unknown email and wrong password collapse into the same generic
    /// error so callers cannot enumerate accounts. An inactive account with
    /// a correct password is reported distinguishably — a deliberate
    /// compatibility choice documented in DESIGN.md.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome, AppError> {
        info!(email = %mask_email(email), "Login attempt");

        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(invalid_credentials)?;

        if !self.hasher.verify_password(password, &user.password_hash) {
            warn!(email = %mask_email(email), "Login failed: password mismatch");
            return Err(invalid_credentials());
        }

        if !user.active {
            warn!(email = %mask_email(email), "Login rejected: inactive account");
            return Err(AppError::authentication("User account is inactive"));
        }

        self.user_repo.update_last_access(user.id).await?;

        let token = self.issuer.issue(&user)?;

        info!(email = %mask_email(email), "Login successful");
        Ok(AuthOutcome { user, token })
    }

    /// Registers a new account and logs it in.
    ///
    /// The email lookup is a fast-path rejection only; the unique
    /// constraint at the storage layer is the real guarantee, and the
    /// repository translates its violation into the same conflict error.
    pub async fn register(&self, data: RegisterData) -> Result<AuthOutcome, AppError> {
        info!(email = %mask_email(&data.email), "Registration attempt");

        self.validate_password(&data.password)?;

        if self.user_repo.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let password_hash = self.hasher.hash_password(&data.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                email: data.email.clone(),
                password_hash,
                full_name: data.full_name,
                role: data.role,
                phone: data.phone,
                organization: data.organization,
            })
            .await?;

        let token = self.issuer.issue(&user)?;

        info!(email = %mask_email(&data.email), "Registration successful");
        Ok(AuthOutcome { user, token })
    }

    /// Fetches a user by ID (used by the verify endpoint).
    pub async fn get_user(&self, user_id: Uuid) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Changes the current user's password after re-verifying the old one.
    /// The new password is always hashed with a fresh salt.
    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::authentication("User not found"))?;

        if !self
            .hasher
            .verify_password(current_password, &user.password_hash)
        {
            return Err(AppError::authentication("Current password is incorrect"));
        }

        self.validate_password(new_password)?;

        let new_hash = self.hasher.hash_password(new_password)?;
        self.user_repo.update_password(user.id, &new_hash).await?;

        info!(user_id = %user.id, "Password changed");
        Ok(())
    }

    fn validate_password(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.password_min_length
            )));
        }
        Ok(())
    }
}

/// The generic credential failure shared by unknown-email and
/// wrong-password branches.
fn invalid_credentials() -> AppError {
    AppError::authentication("Invalid email or password")
}
