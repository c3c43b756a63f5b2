//! The access-control gate: extracts and validates the session token and
//! attaches the caller's identity to the request.
//!
//! Token transport is cookie-first — the HTTP-only session cookie set at
//! login — with an `Authorization: Bearer` header fallback for API and
//! mobile clients. A missing or invalid token leaves the request
//! unauthenticated; rejection happens at the route via [`AuthUser`] (401)
//! or a policy check (403).

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use forestry_auth::policy::RoutePolicy;
use forestry_core::error::AppError;
use forestry_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context. Rejects with 401 when the request
/// carries no valid token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Checks the caller's role against a named route policy.
    pub fn require(&self, policy: RoutePolicy) -> Result<(), AppError> {
        policy.check(self.0.role)
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match authenticate(parts, state) {
            Some(ctx) => Ok(AuthUser(ctx)),
            None => Err(ApiError(AppError::authentication("Not authenticated"))),
        }
    }
}

/// Runs the gate: extract a token, validate it, build the request context.
/// Validation failures are logged and treated as unauthenticated.
fn authenticate(parts: &Parts, state: &AppState) -> Option<RequestContext> {
    let token = extract_token(&parts.headers, &state.config.auth.session_cookie)?;

    match state.token_validator.validate(&token) {
        Ok(claims) => Some(RequestContext::from(claims)),
        Err(_) => {
            debug!("Request carried an invalid session token");
            None
        }
    }
}

/// Pulls the session token from the named cookie, falling back to an
/// `Authorization: Bearer` header.
fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(cookie_name) {
        return Some(cookie.value().to_string());
    }

    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn cookie_takes_precedence_over_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "cookie",
            HeaderValue::from_static("jwt_token=cookie-token; other=x"),
        );
        headers.insert(
            "authorization",
            HeaderValue::from_static("Bearer header-token"),
        );

        assert_eq!(
            extract_token(&headers, "jwt_token").as_deref(),
            Some("cookie-token")
        );
    }

    #[test]
    fn falls_back_to_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_static("Bearer header-token"),
        );

        assert_eq!(
            extract_token(&headers, "jwt_token").as_deref(),
            Some("header-token")
        );
    }

    #[test]
    fn no_token_yields_none() {
        let headers = HeaderMap::new();
        assert!(extract_token(&headers, "jwt_token").is_none());

        let mut basic = HeaderMap::new();
        basic.insert("authorization", HeaderValue::from_static("Basic dXNlcg=="));
        assert!(extract_token(&basic, "jwt_token").is_none());
    }
}
