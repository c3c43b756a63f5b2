//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use forestry_core::config::auth::AuthConfig;
use forestry_core::error::AppError;

use super::claims::TokenClaims;

/// Validates session tokens against the configured key, issuer, and
/// audience.
///
/// Expiry is enforced exactly — no clock-skew leeway. Every failure mode
/// (bad signature, wrong issuer or audience, expired, malformed) collapses
/// to the same opaque authentication error so callers cannot probe
/// cryptographic detail; the specific reason is logged at debug level only.
#[derive(Clone)]
pub struct TokenValidator {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenValidator")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_issuer(&[config.jwt_issuer.clone()]);
        validation.set_audience(&[config.jwt_audience.clone()]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string, returning its claims.
    pub fn validate(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(reason = %e, "Token validation failed");
                AppError::authentication("Invalid or expired token")
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use uuid::Uuid;

    use forestry_core::config::auth::AuthConfig;
    use forestry_entity::user::{User, UserRole};

    use super::super::encoder::TokenIssuer;
    use super::*;

    fn test_config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            jwt_issuer: "ForestInventoryAPI".to_string(),
            jwt_audience: "ForestInventoryApp".to_string(),
            token_ttl_hours: 24,
            session_cookie: "jwt_token".to_string(),
            password_min_length: 8,
            password_migration_enabled: false,
        }
    }

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "a@b.com".to_string(),
            password_hash: "$2b$12$hash".to_string(),
            full_name: "A B".to_string(),
            role: UserRole::Consultant,
            active: true,
            phone: None,
            organization: Some("Forestal Sur".to_string()),
            created_at: Utc::now(),
            last_access_at: None,
        }
    }

    fn claims_with_exp(config: &AuthConfig, exp: i64) -> TokenClaims {
        let now = Utc::now().timestamp();
        TokenClaims {
            sub: Uuid::new_v4(),
            email: "a@b.com".to_string(),
            name: "A B".to_string(),
            role: UserRole::Supervisor,
            org: String::new(),
            iss: config.jwt_issuer.clone(),
            aud: config.jwt_audience.clone(),
            iat: now,
            exp,
        }
    }

    fn sign(claims: &TokenClaims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn issued_token_round_trips() {
        let config = test_config("round-trip-secret");
        let issuer = TokenIssuer::new(&config);
        let validator = TokenValidator::new(&config);

        let user = test_user();
        let issued = issuer.issue(&user).unwrap();
        let claims = validator.validate(&issued.token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, UserRole::Consultant);
        assert_eq!(claims.org, "Forestal Sur");
        assert_eq!(claims.expires_at().timestamp(), issued.expires_at.timestamp());
    }

    #[test]
    fn two_issuances_produce_distinct_tokens() {
        let config = test_config("distinct-secret");
        let issuer = TokenIssuer::new(&config);
        let user = test_user();

        let first = issuer.issue(&user).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(1100));
        let second = issuer.issue(&user).unwrap();

        assert_ne!(first.token, second.token);
    }

    #[test]
    fn missing_organization_becomes_empty_string() {
        let config = test_config("org-secret");
        let issuer = TokenIssuer::new(&config);
        let validator = TokenValidator::new(&config);

        let mut user = test_user();
        user.organization = None;
        let issued = issuer.issue(&user).unwrap();
        let claims = validator.validate(&issued.token).unwrap();

        assert_eq!(claims.org, "");
    }

    #[test]
    fn expired_token_is_rejected_without_leeway() {
        let config = test_config("expiry-secret");
        let validator = TokenValidator::new(&config);

        // One second past expiry: rejected.
        let expired = claims_with_exp(&config, Utc::now().timestamp() - 1);
        assert!(validator.validate(&sign(&expired, "expiry-secret")).is_err());

        // Still inside the window: accepted.
        let valid = claims_with_exp(&config, Utc::now().timestamp() + 60);
        assert!(validator.validate(&sign(&valid, "expiry-secret")).is_ok());
    }

    #[test]
    fn wrong_key_always_fails() {
        let config = test_config("right-secret");
        let validator = TokenValidator::new(&config);

        let claims = claims_with_exp(&config, Utc::now().timestamp() + 3600);
        let forged = sign(&claims, "wrong-secret");

        assert!(validator.validate(&forged).is_err());
    }

    #[test]
    fn wrong_issuer_or_audience_fails() {
        let config = test_config("iss-aud-secret");
        let validator = TokenValidator::new(&config);

        let mut bad_iss = claims_with_exp(&config, Utc::now().timestamp() + 3600);
        bad_iss.iss = "SomeOtherService".to_string();
        assert!(validator.validate(&sign(&bad_iss, "iss-aud-secret")).is_err());

        let mut bad_aud = claims_with_exp(&config, Utc::now().timestamp() + 3600);
        bad_aud.aud = "SomeOtherApp".to_string();
        assert!(validator.validate(&sign(&bad_aud, "iss-aud-secret")).is_err());
    }

    #[test]
    fn malformed_token_fails_with_opaque_error() {
        let config = test_config("malformed-secret");
        let validator = TokenValidator::new(&config);

        for garbage in ["", "not-a-jwt", "a.b.c", "eyJhbGciOiJIUzI1NiJ9.."] {
            let err = validator.validate(garbage).unwrap_err();
            assert_eq!(err.message, "Invalid or expired token");
        }
    }
}
