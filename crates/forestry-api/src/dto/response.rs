//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use forestry_entity::plot::Plot;
use forestry_entity::species::Species;
use forestry_entity::sync::SyncLog;
use forestry_entity::sync::model::SyncStatistics;
use forestry_entity::tree::Tree;
use forestry_entity::user::User;

/// Public user profile. Never carries the password hash or a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Login email.
    pub email: String,
    /// Full display name.
    pub full_name: String,
    /// Role as its canonical string.
    pub role: String,
    /// Whether the account is active.
    pub active: bool,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Organization.
    pub organization: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// Last successful login.
    pub last_access_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            role: user.role.to_string(),
            active: user.active,
            phone: user.phone,
            organization: user.organization,
            created_at: user.created_at,
            last_access_at: user.last_access_at,
        }
    }
}

/// Login/registration response. The token itself travels only in the
/// session cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The authenticated user's profile.
    pub user: UserResponse,
    /// When the session expires.
    pub expires_at: DateTime<Utc>,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Password migration outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationResponse {
    /// Message.
    pub message: String,
    /// Number of credentials rewritten.
    pub migrated: u32,
}

/// Plot details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotResponse {
    /// Plot ID.
    pub id: Uuid,
    /// Field code.
    pub code: String,
    /// Name.
    pub name: String,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
    /// Altitude in meters.
    pub altitude_m: Option<f64>,
    /// Area in hectares.
    pub area_hectares: f64,
    /// Description.
    pub description: Option<String>,
    /// Named location.
    pub location: Option<String>,
    /// Whether the plot is active.
    pub active: bool,
    /// Creating user.
    pub created_by: Uuid,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Plot> for PlotResponse {
    fn from(plot: Plot) -> Self {
        Self {
            id: plot.id,
            code: plot.code,
            name: plot.name,
            latitude: plot.latitude,
            longitude: plot.longitude,
            altitude_m: plot.altitude_m,
            area_hectares: plot.area_hectares,
            description: plot.description,
            location: plot.location,
            active: plot.active,
            created_by: plot.created_by,
            created_at: plot.created_at,
            updated_at: plot.updated_at,
        }
    }
}

/// Tree details with derived dendrometric values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeResponse {
    /// Tree ID.
    pub id: Uuid,
    /// Field code.
    pub code: String,
    /// Sequence number within the plot.
    pub tree_number: i32,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
    /// Altitude in meters.
    pub altitude_m: Option<f64>,
    /// DBH in centimeters.
    pub dbh_cm: f64,
    /// Total height in meters.
    pub total_height_m: f64,
    /// Merchantable height in meters.
    pub merchantable_height_m: Option<f64>,
    /// Crown diameter in meters.
    pub crown_diameter_m: Option<f64>,
    /// Condition as its canonical string.
    pub condition: String,
    /// Field observations.
    pub observations: Option<String>,
    /// Derived basal area in m².
    pub basal_area_m2: f64,
    /// Derived stem volume in m³.
    pub volume_m3: f64,
    /// Measurement time.
    pub measured_at: DateTime<Utc>,
    /// Sync confirmation flag.
    pub synced: bool,
    /// Plot reference.
    pub plot_id: Uuid,
    /// Species reference.
    pub species_id: Uuid,
    /// Capturing user.
    pub created_by: Uuid,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<Tree> for TreeResponse {
    fn from(tree: Tree) -> Self {
        let basal_area_m2 = tree.basal_area_m2();
        let volume_m3 = tree.volume_m3();
        Self {
            id: tree.id,
            code: tree.code,
            tree_number: tree.tree_number,
            latitude: tree.latitude,
            longitude: tree.longitude,
            altitude_m: tree.altitude_m,
            dbh_cm: tree.dbh_cm,
            total_height_m: tree.total_height_m,
            merchantable_height_m: tree.merchantable_height_m,
            crown_diameter_m: tree.crown_diameter_m,
            condition: tree.condition.to_string(),
            observations: tree.observations,
            basal_area_m2,
            volume_m3,
            measured_at: tree.measured_at,
            synced: tree.synced,
            plot_id: tree.plot_id,
            species_id: tree.species_id,
            created_by: tree.created_by,
            created_at: tree.created_at,
        }
    }
}

/// Species details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesResponse {
    /// Species ID.
    pub id: Uuid,
    /// Vernacular name.
    pub common_name: String,
    /// Scientific name.
    pub scientific_name: String,
    /// Botanical family.
    pub family: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Wood density in kg/m³.
    pub wood_density_kg_m3: Option<f64>,
    /// Whether the species is active in the catalog.
    pub active: bool,
    /// When it was added.
    pub created_at: DateTime<Utc>,
}

impl From<Species> for SpeciesResponse {
    fn from(species: Species) -> Self {
        Self {
            id: species.id,
            common_name: species.common_name,
            scientific_name: species.scientific_name,
            family: species.family,
            description: species.description,
            wood_density_kg_m3: species.wood_density_kg_m3,
            active: species.active,
            created_at: species.created_at,
        }
    }
}

/// Sync log details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncLogResponse {
    /// Log ID.
    pub id: Uuid,
    /// User whose device synced.
    pub user_id: Uuid,
    /// Direction as its canonical string.
    pub direction: String,
    /// When the run completed.
    pub synced_at: DateTime<Utc>,
    /// Records pushed from the device.
    pub records_sent: i32,
    /// Records pulled to the device.
    pub records_received: i32,
    /// Whether the run succeeded.
    pub success: bool,
    /// Error message when the run failed.
    pub error_message: Option<String>,
    /// Free-form run details.
    pub details: Option<String>,
}

impl From<SyncLog> for SyncLogResponse {
    fn from(log: SyncLog) -> Self {
        Self {
            id: log.id,
            user_id: log.user_id,
            direction: log.direction.to_string(),
            synced_at: log.synced_at,
            records_sent: log.records_sent,
            records_received: log.records_received,
            success: log.success,
            error_message: log.error_message,
            details: log.details,
        }
    }
}

/// Aggregate sync statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncStatsResponse {
    /// Total recorded runs.
    pub total_runs: i64,
    /// Successful runs.
    pub successful_runs: i64,
    /// Total records pushed by devices.
    pub total_records_sent: i64,
    /// Total records pulled to devices.
    pub total_records_received: i64,
    /// Fraction of runs that succeeded.
    pub success_rate: f64,
}

impl From<SyncStatistics> for SyncStatsResponse {
    fn from(stats: SyncStatistics) -> Self {
        let success_rate = stats.success_rate();
        Self {
            total_runs: stats.total_runs,
            successful_runs: stats.successful_runs,
            total_records_sent: stats.total_records_sent,
            total_records_received: stats.total_records_received,
            success_rate,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Database reachability.
    pub database: String,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use forestry_entity::tree::TreeCondition;

    use super::*;

    #[test]
    fn tree_response_carries_derived_measurements() {
        let tree = Tree {
            id: Uuid::new_v4(),
            code: "a1b2c3d4".to_string(),
            tree_number: 7,
            latitude: -3.99,
            longitude: -79.2,
            altitude_m: Some(2100.0),
            dbh_cm: 30.0,
            total_height_m: 20.0,
            merchantable_height_m: Some(14.0),
            crown_diameter_m: None,
            condition: TreeCondition::Healthy,
            observations: None,
            measured_at: Utc::now(),
            synced: false,
            sync_id: None,
            plot_id: Uuid::new_v4(),
            species_id: Uuid::new_v4(),
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: None,
        };

        let resp = TreeResponse::from(tree);
        assert!((resp.basal_area_m2 - 0.070686).abs() < 1e-5);
        assert!((resp.volume_m3 - 0.98960).abs() < 1e-4);
        assert_eq!(resp.condition, "healthy");
    }
}
