//! Species catalog handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use forestry_auth::policy::RoutePolicy;
use forestry_core::error::AppError;
use forestry_entity::species::model::{CreateSpecies, UpdateSpecies};

use crate::dto::request::{CreateSpeciesRequest, UpdateSpeciesRequest};
use crate::dto::response::{MessageResponse, SpeciesResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/species
pub async fn list_species(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<SpeciesResponse>>> {
    let species = state.species_service.list().await?;
    Ok(Json(
        species.into_iter().map(SpeciesResponse::from).collect(),
    ))
}

/// GET /api/species/{id}
pub async fn get_species(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<SpeciesResponse>> {
    let species = state.species_service.get(id).await?;
    Ok(Json(SpeciesResponse::from(species)))
}

/// POST /api/species
pub async fn create_species(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateSpeciesRequest>,
) -> ApiResult<Json<SpeciesResponse>> {
    auth.require(RoutePolicy::Staff)?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let species = state
        .species_service
        .create(CreateSpecies {
            common_name: req.common_name,
            scientific_name: req.scientific_name,
            family: req.family,
            description: req.description,
            wood_density_kg_m3: req.wood_density_kg_m3,
        })
        .await?;

    Ok(Json(SpeciesResponse::from(species)))
}

/// PUT /api/species/{id}
pub async fn update_species(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateSpeciesRequest>,
) -> ApiResult<Json<SpeciesResponse>> {
    auth.require(RoutePolicy::Staff)?;

    let species = state
        .species_service
        .update(UpdateSpecies {
            id,
            common_name: req.common_name,
            family: req.family,
            description: req.description,
            wood_density_kg_m3: req.wood_density_kg_m3,
        })
        .await?;

    Ok(Json(SpeciesResponse::from(species)))
}

/// DELETE /api/species/{id}
pub async fn deactivate_species(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    auth.require(RoutePolicy::AdminOnly)?;

    state.species_service.deactivate(id).await?;
    Ok(Json(MessageResponse {
        message: "Species deactivated".to_string(),
    }))
}
