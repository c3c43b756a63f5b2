//! Synchronization log repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use forestry_core::error::{AppError, ErrorKind};
use forestry_core::result::AppResult;
use forestry_entity::sync::SyncLog;
use forestry_entity::sync::model::{CreateSyncLog, SyncStatistics};

/// Repository for mobile synchronization logs.
#[derive(Debug, Clone)]
pub struct SyncLogRepository {
    pool: PgPool,
}

impl SyncLogRepository {
    /// Create a new sync log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a sync log by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<SyncLog>> {
        sqlx::query_as::<_, SyncLog>("SELECT * FROM sync_logs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find sync log by id", e)
            })
    }

    /// List all sync logs, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<SyncLog>> {
        sqlx::query_as::<_, SyncLog>("SELECT * FROM sync_logs ORDER BY synced_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list sync logs", e))
    }

    /// List sync logs for one user, newest first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<SyncLog>> {
        sqlx::query_as::<_, SyncLog>(
            "SELECT * FROM sync_logs WHERE user_id = $1 ORDER BY synced_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list sync logs by user", e)
        })
    }

    /// Record the outcome of a synchronization run.
    pub async fn create(&self, data: &CreateSyncLog) -> AppResult<SyncLog> {
        sqlx::query_as::<_, SyncLog>(
            "INSERT INTO sync_logs \
             (user_id, direction, records_sent, records_received, success, error_message, details) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.direction)
        .bind(data.records_sent)
        .bind(data.records_received)
        .bind(data.success)
        .bind(&data.error_message)
        .bind(&data.details)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create sync log", e))
    }

    /// Aggregate statistics over all recorded runs.
    pub async fn statistics(&self) -> AppResult<SyncStatistics> {
        sqlx::query_as::<_, SyncStatistics>(
            "SELECT COUNT(*) AS total_runs, \
                    COUNT(*) FILTER (WHERE success) AS successful_runs, \
                    COALESCE(SUM(records_sent), 0)::BIGINT AS total_records_sent, \
                    COALESCE(SUM(records_received), 0)::BIGINT AS total_records_received \
             FROM sync_logs",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to compute sync statistics", e)
        })
    }
}
