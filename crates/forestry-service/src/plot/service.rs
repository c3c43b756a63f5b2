//! Sample plot management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use forestry_core::error::AppError;
use forestry_database::repositories::plot::PlotRepository;
use forestry_entity::geo::Coordinate;
use forestry_entity::plot::Plot;
use forestry_entity::plot::model::{CreatePlot, UpdatePlot};

use crate::context::RequestContext;

/// Data for creating a plot, before the creator is attached.
#[derive(Debug, Clone)]
pub struct CreatePlotData {
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
}

/// Handles sample plot management.
#[derive(Debug, Clone)]
pub struct PlotService {
    plot_repo: Arc<PlotRepository>,
}

impl PlotService {
    /// Creates a new plot service.
    pub fn new(plot_repo: Arc<PlotRepository>) -> Self {
        Self { plot_repo }
    }

    /// Lists all active plots.
    pub async fn list(&self) -> Result<Vec<Plot>, AppError> {
        self.plot_repo.find_all().await
    }

    /// Fetches a plot by ID.
    pub async fn get(&self, id: Uuid) -> Result<Plot, AppError> {
        self.plot_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Plot {id} not found")))
    }

    /// Creates a plot for the current user.
    pub async fn create(&self, ctx: &RequestContext, data: CreatePlotData) -> Result<Plot, AppError> {
        Coordinate::new(data.latitude, data.longitude, data.altitude_m)?;

        if data.code.trim().is_empty() {
            return Err(AppError::validation("Plot code is required"));
        }
        if data.area_hectares <= 0.0 {
            return Err(AppError::validation("Plot area must be greater than 0"));
        }

        let plot = self
            .plot_repo
            .create(&CreatePlot {
                code: data.code,
                name: data.name,
                latitude: data.latitude,
                longitude: data.longitude,
                altitude_m: data.altitude_m,
                area_hectares: data.area_hectares,
                description: data.description,
                location: data.location,
                created_by: ctx.user_id,
            })
            .await?;

        info!(plot_id = %plot.id, code = %plot.code, "Plot created");
        Ok(plot)
    }

    /// Updates a plot's mutable fields.
    pub async fn update(&self, data: UpdatePlot) -> Result<Plot, AppError> {
        if let Some(area) = data.area_hectares {
            if area <= 0.0 {
                return Err(AppError::validation("Plot area must be greater than 0"));
            }
        }

        let plot = self.plot_repo.update(&data).await?;
        info!(plot_id = %plot.id, "Plot updated");
        Ok(plot)
    }

    /// Deactivates a plot, keeping its records for history.
    pub async fn deactivate(&self, id: Uuid) -> Result<(), AppError> {
        if !self.plot_repo.deactivate(id).await? {
            return Err(AppError::not_found(format!("Plot {id} not found")));
        }
        info!(plot_id = %id, "Plot deactivated");
        Ok(())
    }
}
