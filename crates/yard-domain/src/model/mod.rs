//! Domain model types

pub mod area_stats;
pub mod color;
pub mod slot;
pub mod snapshot;
pub mod view;
pub mod yard_area;

pub use area_stats::{AreaStats, AreaStatsEntry, CountEntry, LayerOccupancy, YardTotals};
pub use color::Rgba;
pub use slot::{container_number, SlotOccupancy, SlotPosition, StoredContainer};
pub use snapshot::OccupancySnapshot;
pub use view::{
    clamp_zoom, ViewAngle, ViewConfiguration, ViewPreset, DEFAULT_ZOOM, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP,
};
pub use yard_area::{find_area, validate_areas, YardArea};
