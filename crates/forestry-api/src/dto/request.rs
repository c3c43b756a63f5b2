//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password (policy is enforced by the auth service).
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Full display name.
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    /// Role name; parsed against the closed role enum, failing closed.
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Organization.
    pub organization: Option<String>,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// Current password.
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    /// New password.
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}

/// Create user request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Initial password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Full display name.
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    /// Role name.
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Organization.
    pub organization: Option<String>,
}

/// Update user request (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    /// New full name.
    pub full_name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New organization.
    pub organization: Option<String>,
}

/// Activate/deactivate user request (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetUserActiveRequest {
    /// Desired account state.
    pub active: bool,
}

/// Create plot request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePlotRequest {
    /// Short field code.
    #[validate(length(min = 1, max = 32, message = "Code must be 1-32 characters"))]
    pub code: String,
    /// Plot name.
    #[validate(length(min = 1, message = "Name is required"))]
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
}

/// Update plot request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePlotRequest {
    /// New name.
    pub name: Option<String>,
    /// New area in hectares.
    pub area_hectares: Option<f64>,
    /// New description.
    pub description: Option<String>,
    /// New named location.
    pub location: Option<String>,
}

/// Create tree request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTreeRequest {
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
    /// Condition name; parsed against the closed enum.
    pub condition: String,
    /// Field observations.
    pub observations: Option<String>,
    /// When the measurement was taken; defaults to now.
    pub measured_at: Option<DateTime<Utc>>,
    /// Sync batch id for mobile-captured records.
    pub sync_id: Option<Uuid>,
    /// Plot the tree belongs to.
    pub plot_id: Uuid,
    /// Species of the tree.
    pub species_id: Uuid,
}

/// Update tree request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTreeRequest {
    /// New DBH in centimeters.
    pub dbh_cm: Option<f64>,
    /// New total height in meters.
    pub total_height_m: Option<f64>,
    /// New merchantable height in meters.
    pub merchantable_height_m: Option<f64>,
    /// New crown diameter in meters.
    pub crown_diameter_m: Option<f64>,
    /// New condition name.
    pub condition: Option<String>,
    /// New observations.
    pub observations: Option<String>,
    /// New species.
    pub species_id: Option<Uuid>,
    /// Sync confirmation flag.
    pub synced: Option<bool>,
}

/// Create species request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSpeciesRequest {
    /// Vernacular name.
    #[validate(length(min = 1, message = "Common name is required"))]
    pub common_name: String,
    /// Scientific name.
    #[validate(length(min = 1, message = "Scientific name is required"))]
    pub scientific_name: String,
    /// Botanical family.
    pub family: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Wood density in kg/m³.
    pub wood_density_kg_m3: Option<f64>,
}

/// Update species request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSpeciesRequest {
    /// New common name.
    pub common_name: Option<String>,
    /// New family.
    pub family: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New wood density.
    pub wood_density_kg_m3: Option<f64>,
}

/// Record sync run request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSyncLogRequest {
    /// Direction name; parsed against the closed enum.
    pub direction: String,
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
