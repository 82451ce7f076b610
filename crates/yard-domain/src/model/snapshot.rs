//! Immutable occupancy snapshot covering every configured area

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::slot::{SlotOccupancy, SlotPosition};

/// A complete occupancy picture of the yard.
///
/// Snapshots are never edited in place: a refresh builds a new one and the
/// grid model swaps it in wholesale, so readers always see consistent state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancySnapshot {
    slots: Vec<SlotOccupancy>,
    generated_at: DateTime<Utc>,
    seed: Option<u64>,
}

impl OccupancySnapshot {
    pub fn new(slots: Vec<SlotOccupancy>) -> Self {
        Self {
            slots,
            generated_at: Utc::now(),
            seed: None,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Record the RNG seed the snapshot was generated from
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn slots(&self) -> &[SlotOccupancy] {
        &self.slots
    }

    /// Slots belonging to one area
    pub fn slots_for<'a>(&'a self, area_id: &'a str) -> impl Iterator<Item = &'a SlotOccupancy> + 'a {
        self.slots.iter().filter(move |s| s.area_id == area_id)
    }

    pub fn slot_at(&self, area_id: &str, position: SlotPosition) -> Option<&SlotOccupancy> {
        self.slots
            .iter()
            .find(|s| s.area_id == area_id && s.position == position)
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn into_slots(self) -> Vec<SlotOccupancy> {
        self.slots
    }
}

impl Default for OccupancySnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
