//! JWT claims structure embedded in every session token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use forestry_entity::user::UserRole;

/// Claims payload of a ForestInventory session token.
///
/// Tokens are stateless: nothing here is persisted server-side, and
/// validity is purely a function of signature, issuer, audience, and
/// expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// Login email.
    pub email: String,
    /// Full display name.
    pub name: String,
    /// User role at the time of issuance.
    pub role: UserRole,
    /// Organization, empty string when the user has none.
    pub org: String,
    /// Token issuer.
    pub iss: String,
    /// Token audience.
    pub aud: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl TokenClaims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}
