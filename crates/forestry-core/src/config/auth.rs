//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// The JWT secret has no default on purpose: [`crate::config::AppConfig::validate`]
/// rejects an empty secret at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default)]
    pub jwt_secret: String,
    /// Expected token issuer.
    #[serde(default = "default_issuer")]
    pub jwt_issuer: String,
    /// Expected token audience.
    #[serde(default = "default_audience")]
    pub jwt_audience: String,
    /// Token lifetime in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Name of the HTTP-only session cookie carrying the token.
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
    /// Minimum password length for registration and password changes.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Operator opt-in for the one-shot plaintext password migration
    /// endpoint. Leave disabled once the migration has run.
    #[serde(default)]
    pub password_migration_enabled: bool,
}

fn default_issuer() -> String {
    "ForestInventoryAPI".to_string()
}

fn default_audience() -> String {
    "ForestInventoryApp".to_string()
}

fn default_token_ttl() -> u64 {
    24
}

fn default_session_cookie() -> String {
    "jwt_token".to_string()
}

fn default_password_min() -> usize {
    8
}
