//! Yard Planning Service - the use cases behind the CLI and GUI
//!
//! Owns the single mutable occupancy snapshot. Refreshes replace it
//! wholesale; statistics and rendering only ever borrow it.

use serde::Serialize;
use thiserror::Error;
use tracing::info;
use yard_domain::model::{
    AreaStats, AreaStatsEntry, CountEntry, LayerOccupancy, OccupancySnapshot, SlotOccupancy,
    SlotPosition, ViewConfiguration, YardArea, YardTotals,
};
use yard_domain::service::{
    DrawList, GenerationPolicy, ObliqueProjection, OccupancyStatsCalculator, ProjectionRenderer,
    Surface, YardGridModel,
};
use yard_infra::RandomOccupancySource;
use yard_types::{Error, LayoutError};

use crate::config::Config;
use crate::repository::{load_areas, open_occupancy_source};

/// Errors specific to the planning service
#[derive(Debug, Error)]
pub enum PlanningServiceError {
    #[error("Unknown area: {0}")]
    UnknownArea(String),

    #[error("Invalid yard layout: {0}")]
    InvalidLayout(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Occupancy source failed: {0}")]
    SourceFailed(String),
}

impl From<Error> for PlanningServiceError {
    fn from(err: Error) -> Self {
        match err {
            Error::Layout(LayoutError::UnknownArea(id)) => PlanningServiceError::UnknownArea(id),
            Error::Layout(e) => PlanningServiceError::InvalidLayout(e.to_string()),
            Error::Config(e) => PlanningServiceError::ConfigError(e.to_string()),
            Error::FileNotFound(path) => {
                PlanningServiceError::ConfigError(format!("file not found: {}", path))
            }
            _ => PlanningServiceError::SourceFailed(err.to_string()),
        }
    }
}

impl From<LayoutError> for PlanningServiceError {
    fn from(err: LayoutError) -> Self {
        Error::Layout(err).into()
    }
}

impl From<PlanningServiceError> for Error {
    fn from(err: PlanningServiceError) -> Self {
        match err {
            PlanningServiceError::UnknownArea(id) => Error::Layout(LayoutError::UnknownArea(id)),
            other => Error::Service(other.to_string()),
        }
    }
}

/// Composition of one area's occupied slots
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaBreakdown {
    pub area_id: String,
    pub container_types: Vec<CountEntry>,
    pub customers: Vec<CountEntry>,
    pub layers: Vec<LayerOccupancy>,
}

pub struct YardPlanningService {
    model: YardGridModel,
    source: RandomOccupancySource,
    renderer: ObliqueProjection,
}

impl YardPlanningService {
    /// Build the service and fill the first snapshot
    pub fn new(
        areas: Vec<YardArea>,
        policy: GenerationPolicy,
        seed: Option<u64>,
    ) -> Result<Self, PlanningServiceError> {
        Self::with_source(areas, RandomOccupancySource::new(policy, seed))
    }

    /// Areas, occupancy range and seed taken from the config
    pub fn from_config(config: &Config) -> Result<Self, PlanningServiceError> {
        let areas = load_areas(config)?;
        Self::with_source(areas, open_occupancy_source(config)?)
    }

    fn with_source(
        areas: Vec<YardArea>,
        source: RandomOccupancySource,
    ) -> Result<Self, PlanningServiceError> {
        let mut service = Self {
            model: YardGridModel::new(areas)?,
            source,
            renderer: ObliqueProjection::default(),
        };
        service.refresh()?;
        Ok(service)
    }

    pub fn model(&self) -> &YardGridModel {
        &self.model
    }

    pub fn areas(&self) -> &[YardArea] {
        self.model.areas()
    }

    pub fn area(&self, area_id: &str) -> Result<&YardArea, PlanningServiceError> {
        self.model
            .area(area_id)
            .ok_or_else(|| PlanningServiceError::UnknownArea(area_id.to_string()))
    }

    pub fn snapshot(&self) -> &OccupancySnapshot {
        self.model.snapshot()
    }

    pub fn seed(&self) -> Option<u64> {
        self.source.seed()
    }

    /// Replace the snapshot with fresh data from the occupancy source
    pub fn refresh(&mut self) -> Result<&OccupancySnapshot, PlanningServiceError> {
        self.model.refresh_from(&self.source)?;
        let snapshot = self.model.snapshot();
        info!(
            areas = self.model.areas().len(),
            slots = snapshot.len(),
            occupied = snapshot.occupied_count(),
            seed = ?self.source.seed(),
            "Yard occupancy refreshed"
        );
        Ok(self.model.snapshot())
    }

    /// Restart the random stream with new settings and refresh
    pub fn reconfigure(
        &mut self,
        policy: GenerationPolicy,
        seed: Option<u64>,
    ) -> Result<&OccupancySnapshot, PlanningServiceError> {
        self.source = RandomOccupancySource::new(policy, seed);
        self.refresh()
    }

    pub fn area_stats(&self, area_id: &str) -> Result<AreaStats, PlanningServiceError> {
        self.area(area_id)?;
        Ok(self.calculator().compute_area_stats(area_id))
    }

    /// Stats for every area, in configuration order
    pub fn overview(&self) -> Vec<AreaStatsEntry> {
        self.calculator().compute_all_area_stats()
    }

    pub fn totals(&self) -> YardTotals {
        self.calculator().compute_totals()
    }

    pub fn breakdown(&self, area_id: &str) -> Result<AreaBreakdown, PlanningServiceError> {
        self.area(area_id)?;
        let calc = self.calculator();
        Ok(AreaBreakdown {
            area_id: area_id.to_string(),
            container_types: calc.container_type_breakdown(area_id),
            customers: calc.customer_breakdown(area_id),
            layers: calc.layer_occupancy(area_id),
        })
    }

    pub fn placeable_slots(&self, area_id: &str) -> Result<Vec<SlotPosition>, PlanningServiceError> {
        self.area(area_id)?;
        Ok(self.calculator().placeable_slots(area_id))
    }

    /// Slots of one area, optionally restricted to a single layer
    pub fn slots(
        &self,
        area_id: &str,
        layer: Option<u32>,
    ) -> Result<Vec<&SlotOccupancy>, PlanningServiceError> {
        self.area(area_id)?;
        Ok(self
            .model
            .snapshot()
            .slots()
            .iter()
            .filter(|s| s.area_id == area_id)
            .filter(|s| layer.map_or(true, |l| s.position.layer == l))
            .collect())
    }

    /// Draw the selected area; unknown areas give an empty list
    pub fn render(&self, view: &ViewConfiguration, surface: Surface) -> DrawList {
        self.renderer.render(&self.model, view, surface)
    }

    fn calculator(&self) -> OccupancyStatsCalculator<'_> {
        OccupancyStatsCalculator::new(self.model.areas(), self.model.snapshot())
    }
}
