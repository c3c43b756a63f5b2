//! Tree measurement record management.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use forestry_core::error::AppError;
use forestry_database::repositories::plot::PlotRepository;
use forestry_database::repositories::species::SpeciesRepository;
use forestry_database::repositories::tree::TreeRepository;
use forestry_entity::geo::Coordinate;
use forestry_entity::tree::model::{CreateTree, UpdateTree};
use forestry_entity::tree::{Measurement, Tree, TreeCondition};

use crate::context::RequestContext;

/// Data for registering a tree, before the creator and code are attached.
#[derive(Debug, Clone)]
pub struct CreateTreeData {
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
    /// When the measurement was taken; defaults to now when absent.
    pub measured_at: Option<DateTime<Utc>>,
    /// Sync batch id, when the record arrives from a mobile device.
    pub sync_id: Option<Uuid>,
    /// Plot the tree belongs to.
    pub plot_id: Uuid,
    /// Species of the tree.
    pub species_id: Uuid,
}

/// Handles tree measurement records.
#[derive(Debug, Clone)]
pub struct TreeService {
    tree_repo: Arc<TreeRepository>,
    plot_repo: Arc<PlotRepository>,
    species_repo: Arc<SpeciesRepository>,
}

impl TreeService {
    /// Creates a new tree service.
    pub fn new(
        tree_repo: Arc<TreeRepository>,
        plot_repo: Arc<PlotRepository>,
        species_repo: Arc<SpeciesRepository>,
    ) -> Self {
        Self {
            tree_repo,
            plot_repo,
            species_repo,
        }
    }

    /// Lists all trees.
    pub async fn list(&self) -> Result<Vec<Tree>, AppError> {
        self.tree_repo.find_all().await
    }

    /// Fetches a tree by ID.
    pub async fn get(&self, id: Uuid) -> Result<Tree, AppError> {
        self.tree_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Tree {id} not found")))
    }

    /// Lists trees in a plot, in field sequence order.
    pub async fn list_by_plot(&self, plot_id: Uuid) -> Result<Vec<Tree>, AppError> {
        self.tree_repo.find_by_plot(plot_id).await
    }

    /// Registers a tree measured by the current user.
    ///
    /// Validates the coordinate and the measurement set before touching the
    /// database, and resolves the plot and species references so a bad ID
    /// surfaces as a client error rather than a constraint failure.
    pub async fn create(&self, ctx: &RequestContext, data: CreateTreeData) -> Result<Tree, AppError> {
        Coordinate::new(data.latitude, data.longitude, data.altitude_m)?;
        Measurement::new(
            data.dbh_cm,
            data.total_height_m,
            data.merchantable_height_m,
            data.crown_diameter_m,
        )?;

        if self.plot_repo.find_by_id(data.plot_id).await?.is_none() {
            return Err(AppError::validation(format!(
                "Plot {} does not exist",
                data.plot_id
            )));
        }
        if self.species_repo.find_by_id(data.species_id).await?.is_none() {
            return Err(AppError::validation(format!(
                "Species {} does not exist",
                data.species_id
            )));
        }

        let code = short_code();
        let tree = self
            .tree_repo
            .create(&CreateTree {
                code,
                tree_number: data.tree_number,
                latitude: data.latitude,
                longitude: data.longitude,
                altitude_m: data.altitude_m,
                dbh_cm: data.dbh_cm,
                total_height_m: data.total_height_m,
                merchantable_height_m: data.merchantable_height_m,
                crown_diameter_m: data.crown_diameter_m,
                condition: data.condition,
                observations: data.observations,
                measured_at: data.measured_at.unwrap_or_else(Utc::now),
                sync_id: data.sync_id,
                plot_id: data.plot_id,
                species_id: data.species_id,
                created_by: ctx.user_id,
            })
            .await?;

        info!(tree_id = %tree.id, plot_id = %tree.plot_id, "Tree registered");
        Ok(tree)
    }

    /// Updates a tree, re-validating the merged measurement set.
    pub async fn update(&self, data: UpdateTree) -> Result<Tree, AppError> {
        let existing = self.get(data.id).await?;

        Measurement::new(
            data.dbh_cm.unwrap_or(existing.dbh_cm),
            data.total_height_m.unwrap_or(existing.total_height_m),
            data.merchantable_height_m.or(existing.merchantable_height_m),
            data.crown_diameter_m.or(existing.crown_diameter_m),
        )?;

        if let Some(species_id) = data.species_id {
            if self.species_repo.find_by_id(species_id).await?.is_none() {
                return Err(AppError::validation(format!(
                    "Species {species_id} does not exist"
                )));
            }
        }

        let tree = self.tree_repo.update(&data).await?;
        info!(tree_id = %tree.id, "Tree updated");
        Ok(tree)
    }

    /// Deletes a tree record.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.tree_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Tree {id} not found")));
        }
        info!(tree_id = %id, "Tree deleted");
        Ok(())
    }
}

/// Short random field code, the first 8 hex characters of a fresh UUID.
fn short_code() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_codes_are_eight_chars_and_random() {
        let a = short_code();
        let b = short_code();
        assert_eq!(a.len(), 8);
        assert_eq!(b.len(), 8);
        assert_ne!(a, b);
    }
}
