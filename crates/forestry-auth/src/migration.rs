//! One-shot migration of legacy plaintext passwords to bcrypt.

use std::sync::Arc;

use tracing::{info, warn};

use forestry_core::error::AppError;
use forestry_core::sanitize::mask_email;
use forestry_database::repositories::user::UserRepository;

use crate::password::PasswordHasher;

/// Rewrites legacy plaintext credentials as bcrypt hashes.
///
/// Scans all active users; any stored value without the bcrypt prefix is
/// treated as plaintext, hashed, and overwritten in place. Idempotent:
/// migrated rows carry the prefix and are skipped on later runs, so a
/// second invocation reports zero migrated records.
#[derive(Debug, Clone)]
pub struct PasswordMigration {
    user_repo: Arc<UserRepository>,
    hasher: PasswordHasher,
}

impl PasswordMigration {
    /// Creates a new migration service.
    pub fn new(user_repo: Arc<UserRepository>, hasher: PasswordHasher) -> Self {
        Self { user_repo, hasher }
    }

    /// Runs the migration and returns the number of rewritten credentials.
    pub async fn migrate_plaintext_passwords(&self) -> Result<u32, AppError> {
        info!("Starting legacy password migration");

        let users = self.user_repo.find_active().await?;
        let mut migrated = 0u32;

        for user in users {
            if PasswordHasher::is_bcrypt_hash(&user.password_hash) {
                continue;
            }

            let hashed = self.hasher.hash_password(&user.password_hash)?;
            self.user_repo.update_password(user.id, &hashed).await?;

            migrated += 1;
            info!(email = %mask_email(&user.email), "Migrated legacy password");
        }

        if migrated == 0 {
            info!("Legacy password migration found nothing to do");
        } else {
            warn!(count = migrated, "Legacy password migration rewrote credentials");
        }

        Ok(migrated)
    }
}
