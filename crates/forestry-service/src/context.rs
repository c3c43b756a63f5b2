//! Request context carrying the authenticated identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use forestry_auth::jwt::TokenClaims;
use forestry_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Attached by the access-control gate from validated token claims and
/// passed into service methods so that every operation knows *who* is
/// acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// Login email from the token claims.
    pub email: String,
    /// Full display name from the token claims.
    pub full_name: String,
    /// The user's role at the time the token was issued.
    pub role: UserRole,
    /// Organization, when the user has one.
    pub organization: Option<String>,
}

impl RequestContext {
    /// Returns whether the current user is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<TokenClaims> for RequestContext {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            full_name: claims.name,
            role: claims.role,
            organization: (!claims.org.is_empty()).then_some(claims.org),
        }
    }
}
