//! Tree repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use forestry_core::error::{AppError, ErrorKind};
use forestry_core::result::AppResult;
use forestry_entity::tree::Tree;
use forestry_entity::tree::model::{CreateTree, UpdateTree};

/// Repository for tree measurement records.
#[derive(Debug, Clone)]
pub struct TreeRepository {
    pool: PgPool,
}

impl TreeRepository {
    /// Create a new tree repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a tree by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Tree>> {
        sqlx::query_as::<_, Tree>("SELECT * FROM trees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find tree by id", e))
    }

    /// List all trees, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Tree>> {
        sqlx::query_as::<_, Tree>("SELECT * FROM trees ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list trees", e))
    }

    /// List trees in a plot, ordered by their sequence number.
    pub async fn find_by_plot(&self, plot_id: Uuid) -> AppResult<Vec<Tree>> {
        sqlx::query_as::<_, Tree>("SELECT * FROM trees WHERE plot_id = $1 ORDER BY tree_number ASC")
            .bind(plot_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list trees by plot", e)
            })
    }

    /// Register a new tree.
    pub async fn create(&self, data: &CreateTree) -> AppResult<Tree> {
        sqlx::query_as::<_, Tree>(
            "INSERT INTO trees \
             (code, tree_number, latitude, longitude, altitude_m, dbh_cm, total_height_m, \
              merchantable_height_m, crown_diameter_m, condition, observations, measured_at, \
              sync_id, plot_id, species_id, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16) \
             RETURNING *",
        )
        .bind(&data.code)
        .bind(data.tree_number)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(data.altitude_m)
        .bind(data.dbh_cm)
        .bind(data.total_height_m)
        .bind(data.merchantable_height_m)
        .bind(data.crown_diameter_m)
        .bind(data.condition)
        .bind(&data.observations)
        .bind(data.measured_at)
        .bind(data.sync_id)
        .bind(data.plot_id)
        .bind(data.species_id)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("trees_plot_id_tree_number_key") =>
            {
                AppError::conflict(format!(
                    "Tree number {} already exists in this plot",
                    data.tree_number
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create tree", e),
        })
    }

    /// Update a tree's mutable fields.
    pub async fn update(&self, data: &UpdateTree) -> AppResult<Tree> {
        sqlx::query_as::<_, Tree>(
            "UPDATE trees SET dbh_cm = COALESCE($2, dbh_cm), \
                              total_height_m = COALESCE($3, total_height_m), \
                              merchantable_height_m = COALESCE($4, merchantable_height_m), \
                              crown_diameter_m = COALESCE($5, crown_diameter_m), \
                              condition = COALESCE($6, condition), \
                              observations = COALESCE($7, observations), \
                              species_id = COALESCE($8, species_id), \
                              synced = COALESCE($9, synced), \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(data.dbh_cm)
        .bind(data.total_height_m)
        .bind(data.merchantable_height_m)
        .bind(data.crown_diameter_m)
        .bind(data.condition)
        .bind(&data.observations)
        .bind(data.species_id)
        .bind(data.synced)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update tree", e))?
        .ok_or_else(|| AppError::not_found(format!("Tree {} not found", data.id)))
    }

    /// Delete a tree record.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM trees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete tree", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Count trees in a plot.
    pub async fn count_by_plot(&self, plot_id: Uuid) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM trees WHERE plot_id = $1")
            .bind(plot_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count trees", e))?;
        Ok(count as u64)
    }
}
