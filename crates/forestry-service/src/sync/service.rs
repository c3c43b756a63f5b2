//! Mobile synchronization log recording and reporting.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use forestry_core::error::AppError;
use forestry_database::repositories::sync_log::SyncLogRepository;
use forestry_entity::sync::SyncLog;
use forestry_entity::sync::model::{CreateSyncLog, SyncStatistics};

use crate::context::RequestContext;

/// Handles mobile synchronization logs.
#[derive(Debug, Clone)]
pub struct SyncLogService {
    sync_repo: Arc<SyncLogRepository>,
}

impl SyncLogService {
    /// Creates a new sync log service.
    pub fn new(sync_repo: Arc<SyncLogRepository>) -> Self {
        Self { sync_repo }
    }

    /// Lists all sync logs.
    pub async fn list(&self) -> Result<Vec<SyncLog>, AppError> {
        self.sync_repo.find_all().await
    }

    /// Fetches a sync log by ID.
    pub async fn get(&self, id: Uuid) -> Result<SyncLog, AppError> {
        self.sync_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Sync log {id} not found")))
    }

    /// Lists sync logs for one user.
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<SyncLog>, AppError> {
        self.sync_repo.find_by_user(user_id).await
    }

    /// Records the outcome of a synchronization run for the current user.
    pub async fn record(
        &self,
        ctx: &RequestContext,
        mut data: CreateSyncLog,
    ) -> Result<SyncLog, AppError> {
        if data.records_sent < 0 || data.records_received < 0 {
            return Err(AppError::validation("Record counts cannot be negative"));
        }

        // Devices always report for the authenticated user.
        data.user_id = ctx.user_id;

        let log = self.sync_repo.create(&data).await?;
        info!(
            sync_id = %log.id,
            user_id = %log.user_id,
            direction = %log.direction,
            success = log.success,
            "Sync run recorded"
        );
        Ok(log)
    }

    /// Aggregate statistics over all recorded runs.
    pub async fn statistics(&self) -> Result<SyncStatistics, AppError> {
        self.sync_repo.statistics().await
    }
}
