//! bcrypt password hashing and verification.

use forestry_core::error::AppError;
use forestry_entity::user::model::BCRYPT_PREFIX;

/// Handles password hashing and verification using bcrypt.
///
/// Every hash call generates a fresh random salt, so hashing the same
/// plaintext twice yields two different strings that both verify.
#[derive(Debug, Clone)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Verifies a plaintext password against a stored bcrypt hash.
    ///
    /// A malformed hash is not an error condition here — it simply does not
    /// match, so this returns `false` rather than propagating.
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }

    /// Whether a stored value is a bcrypt hash rather than legacy plaintext.
    pub fn is_bcrypt_hash(value: &str) -> bool {
        value.starts_with(BCRYPT_PREFIX)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_and_salts_differ() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash_password("Passw0rd!").unwrap();
        let second = hasher.hash_password("Passw0rd!").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify_password("Passw0rd!", &first));
        assert!(hasher.verify_password("Passw0rd!", &second));
        assert!(!hasher.verify_password("wrong", &first));
    }

    #[test]
    fn malformed_hash_returns_false_not_error() {
        let hasher = PasswordHasher::new();
        for malformed in ["", "plaintext", "$1$invalid", "$2b$not-a-real-hash"] {
            assert!(!hasher.verify_password("anything", malformed));
        }
    }

    #[test]
    fn hashes_carry_the_recognizable_prefix() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("Passw0rd!").unwrap();
        assert!(PasswordHasher::is_bcrypt_hash(&hash));
        assert!(!PasswordHasher::is_bcrypt_hash("Passw0rd!"));
    }
}
