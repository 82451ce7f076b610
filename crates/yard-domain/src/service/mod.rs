//! Domain services

pub mod grid_model;
pub mod occupancy_stats;
pub mod projection;
pub mod snapshot_generator;
pub mod stacking;

pub use grid_model::YardGridModel;
pub use occupancy_stats::{occupancy_rate, OccupancyStatsCalculator};
pub use projection::{
    DrawList, DrawPrimitive, ObliqueProjection, Point, ProjectionRenderer, Surface, TextAnchor,
};
pub use snapshot_generator::{generate_area_slots, generate_snapshot, GenerationPolicy, DEFAULT_CUSTOMERS};
pub use stacking::{find_floating_slots, validate_snapshot};
