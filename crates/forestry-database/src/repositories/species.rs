//! Species repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use forestry_core::error::{AppError, ErrorKind};
use forestry_core::result::AppResult;
use forestry_entity::species::Species;
use forestry_entity::species::model::{CreateSpecies, UpdateSpecies};

/// Repository for the species catalog.
#[derive(Debug, Clone)]
pub struct SpeciesRepository {
    pool: PgPool,
}

impl SpeciesRepository {
    /// Create a new species repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a species by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Species>> {
        sqlx::query_as::<_, Species>("SELECT * FROM species WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find species by id", e)
            })
    }

    /// List all active species, alphabetically by common name.
    pub async fn find_all(&self) -> AppResult<Vec<Species>> {
        sqlx::query_as::<_, Species>("SELECT * FROM species WHERE active ORDER BY common_name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list species", e))
    }

    /// Add a species to the catalog.
    pub async fn create(&self, data: &CreateSpecies) -> AppResult<Species> {
        sqlx::query_as::<_, Species>(
            "INSERT INTO species \
             (common_name, scientific_name, family, description, wood_density_kg_m3) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.common_name)
        .bind(&data.scientific_name)
        .bind(&data.family)
        .bind(&data.description)
        .bind(data.wood_density_kg_m3)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("species_scientific_name_key") =>
            {
                AppError::conflict(format!(
                    "Species '{}' is already in the catalog",
                    data.scientific_name
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create species", e),
        })
    }

    /// Update a species' mutable fields.
    pub async fn update(&self, data: &UpdateSpecies) -> AppResult<Species> {
        sqlx::query_as::<_, Species>(
            "UPDATE species SET common_name = COALESCE($2, common_name), \
                                family = COALESCE($3, family), \
                                description = COALESCE($4, description), \
                                wood_density_kg_m3 = COALESCE($5, wood_density_kg_m3) \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.common_name)
        .bind(&data.family)
        .bind(&data.description)
        .bind(data.wood_density_kg_m3)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update species", e))?
        .ok_or_else(|| AppError::not_found(format!("Species {} not found", data.id)))
    }

    /// Deactivate a species (existing tree records keep their reference).
    pub async fn deactivate(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("UPDATE species SET active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to deactivate species", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
