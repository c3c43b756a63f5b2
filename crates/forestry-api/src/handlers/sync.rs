//! Mobile synchronization log handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use forestry_auth::policy::RoutePolicy;
use forestry_entity::sync::model::CreateSyncLog;

use crate::dto::request::CreateSyncLogRequest;
use crate::dto::response::{SyncLogResponse, SyncStatsResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/sync-logs
pub async fn list_sync_logs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<SyncLogResponse>>> {
    auth.require(RoutePolicy::Staff)?;

    let logs = state.sync_service.list().await?;
    Ok(Json(logs.into_iter().map(SyncLogResponse::from).collect()))
}

/// GET /api/sync-logs/{id}
pub async fn get_sync_log(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<SyncLogResponse>> {
    auth.require(RoutePolicy::Staff)?;

    let log = state.sync_service.get(id).await?;
    Ok(Json(SyncLogResponse::from(log)))
}

/// GET /api/sync-logs/user/{id}
pub async fn list_user_sync_logs(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<Vec<SyncLogResponse>>> {
    auth.require(RoutePolicy::Staff)?;

    let logs = state.sync_service.list_by_user(user_id).await?;
    Ok(Json(logs.into_iter().map(SyncLogResponse::from).collect()))
}

/// POST /api/sync-logs
///
/// Any authenticated role may report its own device's sync outcome.
pub async fn create_sync_log(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateSyncLogRequest>,
) -> ApiResult<Json<SyncLogResponse>> {
    let direction = req.direction.parse()?;

    let log = state
        .sync_service
        .record(
            &auth,
            CreateSyncLog {
                user_id: auth.user_id,
                direction,
                records_sent: req.records_sent,
                records_received: req.records_received,
                success: req.success,
                error_message: req.error_message,
                details: req.details,
            },
        )
        .await?;

    Ok(Json(SyncLogResponse::from(log)))
}

/// GET /api/sync-logs/statistics
pub async fn sync_statistics(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<SyncStatsResponse>> {
    auth.require(RoutePolicy::Staff)?;

    let stats = state.sync_service.statistics().await?;
    Ok(Json(SyncStatsResponse::from(stats)))
}
