//! Tree handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use forestry_auth::policy::RoutePolicy;
use forestry_entity::tree::model::UpdateTree;
use forestry_service::tree::service::CreateTreeData;

use crate::dto::request::{CreateTreeRequest, UpdateTreeRequest};
use crate::dto::response::{MessageResponse, TreeResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/trees
pub async fn list_trees(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<TreeResponse>>> {
    let trees = state.tree_service.list().await?;
    Ok(Json(trees.into_iter().map(TreeResponse::from).collect()))
}

/// GET /api/trees/{id}
pub async fn get_tree(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<TreeResponse>> {
    let tree = state.tree_service.get(id).await?;
    Ok(Json(TreeResponse::from(tree)))
}

/// POST /api/trees
pub async fn create_tree(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateTreeRequest>,
) -> ApiResult<Json<TreeResponse>> {
    auth.require(RoutePolicy::Staff)?;

    let condition = req.condition.parse()?;

    let tree = state
        .tree_service
        .create(
            &auth,
            CreateTreeData {
                tree_number: req.tree_number,
                latitude: req.latitude,
                longitude: req.longitude,
                altitude_m: req.altitude_m,
                dbh_cm: req.dbh_cm,
                total_height_m: req.total_height_m,
                merchantable_height_m: req.merchantable_height_m,
                crown_diameter_m: req.crown_diameter_m,
                condition,
                observations: req.observations,
                measured_at: req.measured_at,
                sync_id: req.sync_id,
                plot_id: req.plot_id,
                species_id: req.species_id,
            },
        )
        .await?;

    Ok(Json(TreeResponse::from(tree)))
}

/// PUT /api/trees/{id}
pub async fn update_tree(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTreeRequest>,
) -> ApiResult<Json<TreeResponse>> {
    auth.require(RoutePolicy::Staff)?;

    let condition = req.condition.map(|c| c.parse()).transpose()?;

    let tree = state
        .tree_service
        .update(UpdateTree {
            id,
            dbh_cm: req.dbh_cm,
            total_height_m: req.total_height_m,
            merchantable_height_m: req.merchantable_height_m,
            crown_diameter_m: req.crown_diameter_m,
            condition,
            observations: req.observations,
            species_id: req.species_id,
            synced: req.synced,
        })
        .await?;

    Ok(Json(TreeResponse::from(tree)))
}

/// DELETE /api/trees/{id}
pub async fn delete_tree(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    auth.require(RoutePolicy::AdminOnly)?;

    state.tree_service.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Tree deleted".to_string(),
    }))
}
