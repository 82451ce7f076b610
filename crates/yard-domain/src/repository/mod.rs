//! Repository trait definitions for yard data sources

use crate::model::{SlotOccupancy, YardArea};
use yard_types::Error;

/// Supplies the occupancy of one area.
///
/// The random generator implements this today; a backend client can take its
/// place without touching statistics or rendering.
pub trait OccupancySource {
    /// Fetch every slot of the area (exactly rows x cols x layers records)
    fn fetch_occupancy(&self, area: &YardArea) -> Result<Vec<SlotOccupancy>, Error>;

    /// Seed the data was generated from, when reproducible
    fn seed(&self) -> Option<u64> {
        None
    }
}

/// Repository for configured yard areas
pub trait YardAreaRepository {
    /// All areas in configuration order
    fn find_all(&self) -> Result<Vec<YardArea>, Error>;

    /// Find an area by its id
    fn find_by_id(&self, area_id: &str) -> Result<Option<YardArea>, Error>;
}
