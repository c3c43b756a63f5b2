//! Species catalog management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use forestry_core::error::AppError;
use forestry_database::repositories::species::SpeciesRepository;
use forestry_entity::species::Species;
use forestry_entity::species::model::{CreateSpecies, UpdateSpecies};

/// Handles the species catalog.
#[derive(Debug, Clone)]
pub struct SpeciesService {
    species_repo: Arc<SpeciesRepository>,
}

impl SpeciesService {
    /// Creates a new species service.
    pub fn new(species_repo: Arc<SpeciesRepository>) -> Self {
        Self { species_repo }
    }

    /// Lists all active species.
    pub async fn list(&self) -> Result<Vec<Species>, AppError> {
        self.species_repo.find_all().await
    }

    /// Fetches a species by ID.
    pub async fn get(&self, id: Uuid) -> Result<Species, AppError> {
        self.species_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Species {id} not found")))
    }

    /// Adds a species to the catalog.
    pub async fn create(&self, data: CreateSpecies) -> Result<Species, AppError> {
        if data.common_name.trim().is_empty() {
            return Err(AppError::validation("Common name is required"));
        }
        if data.scientific_name.trim().is_empty() {
            return Err(AppError::validation("Scientific name is required"));
        }
        if let Some(density) = data.wood_density_kg_m3 {
            if density <= 0.0 {
                return Err(AppError::validation("Wood density must be greater than 0"));
            }
        }

        let species = self.species_repo.create(&data).await?;
        info!(species_id = %species.id, name = %species.scientific_name, "Species created");
        Ok(species)
    }

    /// Updates a species' mutable fields.
    pub async fn update(&self, data: UpdateSpecies) -> Result<Species, AppError> {
        if let Some(density) = data.wood_density_kg_m3 {
            if density <= 0.0 {
                return Err(AppError::validation("Wood density must be greater than 0"));
            }
        }

        let species = self.species_repo.update(&data).await?;
        info!(species_id = %species.id, "Species updated");
        Ok(species)
    }

    /// Deactivates a species; existing tree records keep their reference.
    pub async fn deactivate(&self, id: Uuid) -> Result<(), AppError> {
        if !self.species_repo.deactivate(id).await? {
            return Err(AppError::not_found(format!("Species {id} not found")));
        }
        info!(species_id = %id, "Species deactivated");
        Ok(())
    }
}
