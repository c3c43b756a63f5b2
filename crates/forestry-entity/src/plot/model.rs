//! Sample plot entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A georeferenced sample plot where trees are measured.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Plot {
    /// Unique plot identifier.
    pub id: Uuid,
    /// Short field code, unique across all plots.
    pub code: String,
    /// Human-readable plot name.
    pub name: String,
    /// Latitude of the plot center in decimal degrees.
    pub latitude: f64,
    /// Longitude of the plot center in decimal degrees.
    pub longitude: f64,
    /// Altitude of the plot center in meters.
    pub altitude_m: Option<f64>,
    /// Plot area in hectares.
    pub area_hectares: f64,
    /// Free-form description.
    pub description: Option<String>,
    /// Named location (region, canton, sector).
    pub location: Option<String>,
    /// Inactive plots are retained for history but hidden from field work.
    pub active: bool,
    /// User who created the plot.
    pub created_by: Uuid,
    /// When the plot was created.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data required to create a plot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlot {
    /// Short field code.
    pub code: String,
    /// Plot name.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Altitude in meters.
    pub altitude_m: Option<f64>,
    /// Area in hectares.
    pub area_hectares: f64,
    /// Description.
    pub description: Option<String>,
    /// Named location.
    pub location: Option<String>,
    /// Creating user.
    pub created_by: Uuid,
}

/// Data for updating a plot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePlot {
    /// The plot ID to update.
    pub id: Uuid,
    /// New name.
    pub name: Option<String>,
    /// New area in hectares.
    pub area_hectares: Option<f64>,
    /// New description.
    pub description: Option<String>,
    /// New named location.
    pub location: Option<String>,
}
