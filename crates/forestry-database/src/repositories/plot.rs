//! Plot repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use forestry_core::error::{AppError, ErrorKind};
use forestry_core::result::AppResult;
use forestry_entity::plot::Plot;
use forestry_entity::plot::model::{CreatePlot, UpdatePlot};

/// Repository for sample plot CRUD and query operations.
#[derive(Debug, Clone)]
pub struct PlotRepository {
    pool: PgPool,
}

impl PlotRepository {
    /// Create a new plot repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a plot by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Plot>> {
        sqlx::query_as::<_, Plot>("SELECT * FROM plots WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find plot by id", e))
    }

    /// Find a plot by its field code.
    pub async fn find_by_code(&self, code: &str) -> AppResult<Option<Plot>> {
        sqlx::query_as::<_, Plot>("SELECT * FROM plots WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find plot by code", e)
            })
    }

    /// List all active plots, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Plot>> {
        sqlx::query_as::<_, Plot>("SELECT * FROM plots WHERE active ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list plots", e))
    }

    /// Create a new plot.
    pub async fn create(&self, data: &CreatePlot) -> AppResult<Plot> {
        sqlx::query_as::<_, Plot>(
            "INSERT INTO plots \
             (code, name, latitude, longitude, altitude_m, area_hectares, description, location, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING *",
        )
        .bind(&data.code)
        .bind(&data.name)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(data.altitude_m)
        .bind(data.area_hectares)
        .bind(&data.description)
        .bind(&data.location)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("plots_code_key") => {
                AppError::conflict(format!("Plot code '{}' already exists", data.code))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create plot", e),
        })
    }

    /// Update a plot's mutable fields.
    pub async fn update(&self, data: &UpdatePlot) -> AppResult<Plot> {
        sqlx::query_as::<_, Plot>(
            "UPDATE plots SET name = COALESCE($2, name), \
                              area_hectares = COALESCE($3, area_hectares), \
                              description = COALESCE($4, description), \
                              location = COALESCE($5, location), \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.name)
        .bind(data.area_hectares)
        .bind(&data.description)
        .bind(&data.location)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update plot", e))?
        .ok_or_else(|| AppError::not_found(format!("Plot {} not found", data.id)))
    }

    /// Deactivate a plot (records are kept for history).
    pub async fn deactivate(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("UPDATE plots SET active = FALSE, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to deactivate plot", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
