//! Plot handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use forestry_auth::policy::RoutePolicy;
use forestry_core::error::AppError;
use forestry_entity::plot::model::UpdatePlot;
use forestry_service::plot::service::CreatePlotData;

use crate::dto::request::{CreatePlotRequest, UpdatePlotRequest};
use crate::dto::response::{MessageResponse, PlotResponse, TreeResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/plots
pub async fn list_plots(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<PlotResponse>>> {
    let plots = state.plot_service.list().await?;
    Ok(Json(plots.into_iter().map(PlotResponse::from).collect()))
}

/// GET /api/plots/{id}
pub async fn get_plot(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<PlotResponse>> {
    let plot = state.plot_service.get(id).await?;
    Ok(Json(PlotResponse::from(plot)))
}

/// GET /api/plots/{id}/trees
pub async fn list_plot_trees(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Vec<TreeResponse>>> {
    // 404 for an unknown plot rather than an empty list.
    state.plot_service.get(id).await?;

    let trees = state.tree_service.list_by_plot(id).await?;
    Ok(Json(trees.into_iter().map(TreeResponse::from).collect()))
}

/// POST /api/plots
pub async fn create_plot(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreatePlotRequest>,
) -> ApiResult<Json<PlotResponse>> {
    auth.require(RoutePolicy::Staff)?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let plot = state
        .plot_service
        .create(
            &auth,
            CreatePlotData {
                code: req.code,
                name: req.name,
                latitude: req.latitude,
                longitude: req.longitude,
                altitude_m: req.altitude_m,
                area_hectares: req.area_hectares,
                description: req.description,
                location: req.location,
            },
        )
        .await?;

    Ok(Json(PlotResponse::from(plot)))
}

/// PUT /api/plots/{id}
pub async fn update_plot(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePlotRequest>,
) -> ApiResult<Json<PlotResponse>> {
    auth.require(RoutePolicy::Staff)?;

    let plot = state
        .plot_service
        .update(UpdatePlot {
            id,
            name: req.name,
            area_hectares: req.area_hectares,
            description: req.description,
            location: req.location,
        })
        .await?;

    Ok(Json(PlotResponse::from(plot)))
}

/// DELETE /api/plots/{id}
pub async fn deactivate_plot(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    auth.require(RoutePolicy::AdminOnly)?;

    state.plot_service.deactivate(id).await?;
    Ok(Json(MessageResponse {
        message: "Plot deactivated".to_string(),
    }))
}
