//! JWT token creation with configurable signing, issuer, and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use forestry_core::config::auth::AuthConfig;
use forestry_core::error::AppError;
use forestry_entity::user::User;

use super::claims::TokenClaims;

/// Creates signed session tokens.
///
/// Built once at startup from [`AuthConfig`]; the signing secret is
/// validated before this type is ever constructed.
#[derive(Clone)]
pub struct TokenIssuer {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Issuer claim stamped into every token.
    issuer: String,
    /// Audience claim stamped into every token.
    audience: String,
    /// Token lifetime in hours.
    ttl_hours: i64,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("ttl_hours", &self.ttl_hours)
            .finish()
    }
}

/// A freshly issued token with its expiry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// The compact signed token string.
    pub token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
}

impl TokenIssuer {
    /// Creates a new issuer from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.jwt_issuer.clone(),
            audience: config.jwt_audience.clone(),
            ttl_hours: config.token_ttl_hours as i64,
        }
    }

    /// Issues a session token for the given user.
    ///
    /// Two tokens issued at different instants for the same user differ:
    /// `iat` and `exp` move with the clock, so tokens are never comparable
    /// for equality.
    pub fn issue(&self, user: &User) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::hours(self.ttl_hours);

        let claims = TokenClaims {
            sub: user.id,
            email: user.email.clone(),
            name: user.full_name.clone(),
            role: user.role,
            org: user.organization.clone().unwrap_or_default(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}
