//! Tree species entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A tree species from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Species {
    /// Unique species identifier.
    pub id: Uuid,
    /// Vernacular name.
    pub common_name: String,
    /// Scientific (binomial) name, unique across the catalog.
    pub scientific_name: String,
    /// Botanical family.
    pub family: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Wood density in kg/m³, used for biomass estimates.
    pub wood_density_kg_m3: Option<f64>,
    /// Inactive species are hidden from capture forms.
    pub active: bool,
    /// When the species was added to the catalog.
    pub created_at: DateTime<Utc>,
}

/// Data required to add a species to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSpecies {
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
}

/// Data for updating a species.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSpecies {
    /// The species ID to update.
    pub id: Uuid,
    /// New common name.
    pub common_name: Option<String>,
    /// New family.
    pub family: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New wood density.
    pub wood_density_kg_m3: Option<f64>,
}
