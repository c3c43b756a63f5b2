//! Mobile synchronization log entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Direction of a mobile synchronization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "sync_direction", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SyncDirection {
    /// Device pushed field records to the server.
    Upload,
    /// Device pulled catalog data from the server.
    Download,
    /// Bidirectional sync.
    Full,
}

impl SyncDirection {
    /// Return the direction as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Download => "download",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for SyncDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SyncDirection {
    type Err = forestry_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upload" => Ok(Self::Upload),
            "download" => Ok(Self::Download),
            "full" => Ok(Self::Full),
            _ => Err(forestry_core::AppError::validation(format!(
                "Invalid sync direction: '{s}'. Expected one of: upload, download, full"
            ))),
        }
    }
}

/// Outcome of one mobile synchronization run.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SyncLog {
    /// Unique log identifier.
    pub id: Uuid,
    /// User whose device synced.
    pub user_id: Uuid,
    /// Direction of the run.
    pub direction: SyncDirection,
    /// When the run completed.
    pub synced_at: DateTime<Utc>,
    /// Records pushed from the device.
    pub records_sent: i32,
    /// Records pulled to the device.
    pub records_received: i32,
    /// Whether the run completed without errors.
    pub success: bool,
    /// Error message when the run failed.
    pub error_message: Option<String>,
    /// Free-form run details.
    pub details: Option<String>,
}

/// Data required to record a synchronization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSyncLog {
    /// User whose device synced.
    pub user_id: Uuid,
    /// Direction of the run.
    pub direction: SyncDirection,
    /// Records pushed from the device.
    pub records_sent: i32,
    /// Records pulled to the device.
    pub records_received: i32,
    /// Whether the run completed without errors.
    pub success: bool,
    /// Error message when the run failed.
    pub error_message: Option<String>,
    /// Free-form run details.
    pub details: Option<String>,
}

/// Aggregate synchronization statistics.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SyncStatistics {
    /// Total recorded runs.
    pub total_runs: i64,
    /// Runs that completed successfully.
    pub successful_runs: i64,
    /// Total records pushed by devices.
    pub total_records_sent: i64,
    /// Total records pulled to devices.
    pub total_records_received: i64,
}

impl SyncStatistics {
    /// Fraction of runs that succeeded, 0.0 when no runs are recorded.
    pub fn success_rate(&self) -> f64 {
        if self.total_runs == 0 {
            0.0
        } else {
            self.successful_runs as f64 / self.total_runs as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_rate_handles_zero_runs() {
        let stats = SyncStatistics {
            total_runs: 0,
            successful_runs: 0,
            total_records_sent: 0,
            total_records_received: 0,
        };
        assert_eq!(stats.success_rate(), 0.0);
    }

    #[test]
    fn success_rate_is_fractional() {
        let stats = SyncStatistics {
            total_runs: 4,
            successful_runs: 3,
            total_records_sent: 120,
            total_records_received: 40,
        };
        assert!((stats.success_rate() - 0.75).abs() < f64::EPSILON);
    }
}
