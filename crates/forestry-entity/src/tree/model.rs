//! Tree entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::condition::TreeCondition;
use super::measurement::Measurement;

/// A single measured tree within a plot.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tree {
    /// Unique tree identifier.
    pub id: Uuid,
    /// Short field code.
    pub code: String,
    /// Sequential tree number within its plot.
    pub tree_number: i32,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Altitude in meters.
    pub altitude_m: Option<f64>,
    /// Diameter at breast height in centimeters.
    pub dbh_cm: f64,
    /// Total height in meters.
    pub total_height_m: f64,
    /// Merchantable height in meters.
    pub merchantable_height_m: Option<f64>,
    /// Crown diameter in meters.
    pub crown_diameter_m: Option<f64>,
    /// Observed condition.
    pub condition: TreeCondition,
    /// Field observations.
    pub observations: Option<String>,
    /// When the measurement was taken in the field.
    pub measured_at: DateTime<Utc>,
    /// Whether the record has been confirmed synced to a mobile device.
    pub synced: bool,
    /// Mobile sync batch this record arrived in, when applicable.
    pub sync_id: Option<Uuid>,
    /// Plot the tree belongs to.
    pub plot_id: Uuid,
    /// Species of the tree.
    pub species_id: Uuid,
    /// User who captured the record.
    pub created_by: Uuid,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Tree {
    /// The tree's measurements as a value object.
    pub fn measurement(&self) -> Measurement {
        Measurement {
            dbh_cm: self.dbh_cm,
            total_height_m: self.total_height_m,
            merchantable_height_m: self.merchantable_height_m,
            crown_diameter_m: self.crown_diameter_m,
        }
    }

    /// Basal area in m².
    pub fn basal_area_m2(&self) -> f64 {
        self.measurement().basal_area_m2()
    }

    /// Stem volume in m³.
    pub fn volume_m3(&self) -> f64 {
        self.measurement().volume_m3()
    }
}

/// Data required to register a tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTree {
    /// Short field code.
    pub code: String,
    /// Sequential number within the plot.
    pub tree_number: i32,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Altitude in meters.
    pub altitude_m: Option<f64>,
    /// Diameter at breast height in centimeters.
    pub dbh_cm: f64,
    /// Total height in meters.
    pub total_height_m: f64,
    /// Merchantable height in meters.
    pub merchantable_height_m: Option<f64>,
    /// Crown diameter in meters.
    pub crown_diameter_m: Option<f64>,
    /// Observed condition.
    pub condition: TreeCondition,
    /// Field observations.
    pub observations: Option<String>,
    /// When the measurement was taken.
    pub measured_at: DateTime<Utc>,
    /// Sync batch id, when the record arrives from a mobile device.
    pub sync_id: Option<Uuid>,
    /// Plot the tree belongs to.
    pub plot_id: Uuid,
    /// Species of the tree.
    pub species_id: Uuid,
    /// Capturing user.
    pub created_by: Uuid,
}

/// Data for updating a tree record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTree {
    /// The tree ID to update.
    pub id: Uuid,
    /// New DBH in centimeters.
    pub dbh_cm: Option<f64>,
    /// New total height in meters.
    pub total_height_m: Option<f64>,
    /// New merchantable height in meters.
    pub merchantable_height_m: Option<f64>,
    /// New crown diameter in meters.
    pub crown_diameter_m: Option<f64>,
    /// New condition.
    pub condition: Option<TreeCondition>,
    /// New observations.
    pub observations: Option<String>,
    /// New species.
    pub species_id: Option<Uuid>,
    /// Sync confirmation flag.
    pub synced: Option<bool>,
}
