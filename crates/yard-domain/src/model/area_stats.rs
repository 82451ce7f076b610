//! Derived occupancy statistics

use serde::{Deserialize, Serialize};
use yard_types::OccupancyLevel;

/// Occupancy figures for one area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaStats {
    pub total: usize,
    pub occupied: usize,
    pub available: usize,
    /// Occupied share of total, whole percent rounded half-up; 0 for an empty area
    pub occupancy_rate: u32,
}

impl AreaStats {
    pub fn level(&self) -> OccupancyLevel {
        OccupancyLevel::from_rate(self.occupancy_rate)
    }
}

/// Area stats tagged with the area they belong to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaStatsEntry {
    pub area_id: String,
    pub area_name: String,
    pub stats: AreaStats,
}

/// Rollup across all areas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YardTotals {
    pub area_count: usize,
    pub stats: AreaStats,
}

/// Occupied-slot count for one label (container type, customer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry {
    pub label: String,
    pub count: usize,
}

/// Occupancy of one stacking layer across an area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerOccupancy {
    pub layer: u32,
    pub occupied: usize,
    /// Ground cells in the area (rows x cols)
    pub capacity: usize,
}
