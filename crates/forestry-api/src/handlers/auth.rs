//! Auth handlers — login, register, logout, verify, change password, and
//! the legacy password migration.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use forestry_core::error::{AppError, ErrorKind};
use forestry_service::auth::service::{AuthOutcome, RegisterData};

use crate::dto::request::{ChangePasswordRequest, LoginRequest, RegisterRequest};
use crate::dto::response::{LoginResponse, MessageResponse, MigrationResponse, UserResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> ApiResult<(CookieJar, Json<LoginResponse>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state.auth_service.login(&req.email, &req.password).await?;

    respond_with_session(&state, jar, outcome)
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(CookieJar, Json<LoginResponse>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let role = req.role.parse()?;

    let outcome = state
        .auth_service
        .register(RegisterData {
            email: req.email,
            password: req.password,
            full_name: req.full_name,
            role,
            phone: req.phone,
            organization: req.organization,
        })
        .await?;

    respond_with_session(&state, jar, outcome)
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    _auth: AuthUser,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Json<MessageResponse>)> {
    let removal = Cookie::build((state.config.auth.session_cookie.clone(), ""))
        .path("/")
        .build();

    Ok((
        jar.remove(removal),
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    ))
}

/// GET /api/auth/verify
pub async fn verify(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    // The token can outlive its user; a vanished account reads as an
    // invalid session, not a 404.
    let user = state
        .auth_service
        .get_user(auth.user_id)
        .await
        .map_err(|e| match e.kind {
            ErrorKind::NotFound => AppError::authentication("Invalid session"),
            _ => e,
        })?;

    Ok(Json(UserResponse::from(user)))
}

/// POST /api/auth/change-password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ChangePasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .auth_service
        .change_password(auth.user_id, &req.current_password, &req.new_password)
        .await?;

    Ok(Json(MessageResponse {
        message: "Password changed successfully".to_string(),
    }))
}

/// POST /api/auth/migrate-passwords
///
/// One-shot bootstrap operation; disabled unless the operator explicitly
/// enables `auth.password_migration_enabled`.
pub async fn migrate_passwords(
    State(state): State<AppState>,
) -> ApiResult<Json<MigrationResponse>> {
    if !state.config.auth.password_migration_enabled {
        return Err(AppError::authorization("Password migration is disabled").into());
    }

    let migrated = state
        .password_migration
        .migrate_plaintext_passwords()
        .await?;

    Ok(Json(MigrationResponse {
        message: "Migration completed".to_string(),
        migrated,
    }))
}

/// Sets the HTTP-only session cookie and builds the login response body.
/// The token value never appears in the body.
fn respond_with_session(
    state: &AppState,
    jar: CookieJar,
    outcome: AuthOutcome,
) -> ApiResult<(CookieJar, Json<LoginResponse>)> {
    let remaining = (outcome.token.expires_at - chrono::Utc::now()).num_seconds();

    let cookie = Cookie::build((
        state.config.auth.session_cookie.clone(),
        outcome.token.token,
    ))
    .path("/")
    .http_only(true)
    .secure(true)
    .same_site(SameSite::Strict)
    .max_age(time::Duration::seconds(remaining))
    .build();

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            user: UserResponse::from(outcome.user),
            expires_at: outcome.token.expires_at,
        }),
    ))
}
