//! User administration handlers. All routes here are admin-only.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use forestry_auth::policy::RoutePolicy;
use forestry_core::error::AppError;
use forestry_entity::user::model::UpdateUser;
use forestry_service::user::service::CreateUserData;

use crate::dto::request::{CreateUserRequest, SetUserActiveRequest, UpdateUserRequest};
use crate::dto::response::{MessageResponse, UserResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    auth.require(RoutePolicy::AdminOnly)?;

    let users = state.user_service.list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<UserResponse>> {
    auth.require(RoutePolicy::AdminOnly)?;

    let user = state.user_service.get(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    auth.require(RoutePolicy::AdminOnly)?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let role = req.role.parse()?;

    let user = state
        .user_service
        .create(CreateUserData {
            email: req.email,
            password: req.password,
            full_name: req.full_name,
            role,
            phone: req.phone,
            organization: req.organization,
        })
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    auth.require(RoutePolicy::AdminOnly)?;

    let user = state
        .user_service
        .update(UpdateUser {
            id,
            full_name: req.full_name,
            phone: req.phone,
            organization: req.organization,
        })
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// PUT /api/users/{id}/active
pub async fn set_user_active(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<SetUserActiveRequest>,
) -> ApiResult<Json<UserResponse>> {
    auth.require(RoutePolicy::AdminOnly)?;

    let user = state.user_service.set_active(id, req.active).await?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    auth.require(RoutePolicy::AdminOnly)?;

    if id == auth.user_id {
        return Err(AppError::validation("Administrators cannot delete their own account").into());
    }

    state.user_service.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "User deleted".to_string(),
    }))
}
