//! Authoritative occupancy state for the configured yard areas

use rand::Rng;
use tracing::{debug, info};
use yard_types::{Error, LayoutError};

use crate::model::{find_area, validate_areas, OccupancySnapshot, SlotOccupancy, YardArea};
use crate::repository::OccupancySource;

use super::snapshot_generator::{generate_snapshot, GenerationPolicy};
use super::stacking::validate_snapshot;

/// Holds the static area configuration and the current occupancy snapshot.
///
/// The snapshot is only ever replaced wholesale; readers borrow it for the
/// duration of a stats pass or a render pass.
#[derive(Debug, Clone)]
pub struct YardGridModel {
    areas: Vec<YardArea>,
    snapshot: OccupancySnapshot,
}

impl YardGridModel {
    /// Create a model over validated areas with an empty snapshot
    pub fn new(areas: Vec<YardArea>) -> Result<Self, LayoutError> {
        validate_areas(&areas)?;
        Ok(Self {
            areas,
            snapshot: OccupancySnapshot::empty(),
        })
    }

    pub fn areas(&self) -> &[YardArea] {
        &self.areas
    }

    pub fn area(&self, area_id: &str) -> Option<&YardArea> {
        find_area(&self.areas, area_id)
    }

    pub fn snapshot(&self) -> &OccupancySnapshot {
        &self.snapshot
    }

    /// Generate a new snapshot for the configured areas without installing it
    pub fn generate_snapshot<R: Rng + ?Sized>(
        &self,
        policy: &GenerationPolicy,
        rng: &mut R,
    ) -> OccupancySnapshot {
        generate_snapshot(&self.areas, policy, rng)
    }

    /// Swap in a new snapshot, returning the previous one.
    ///
    /// The candidate must cover every area completely and must not contain
    /// floating containers; on failure the current snapshot is kept.
    pub fn replace(&mut self, snapshot: OccupancySnapshot) -> Result<OccupancySnapshot, LayoutError> {
        validate_snapshot(&self.areas, &snapshot)?;
        debug!(
            slots = snapshot.len(),
            occupied = snapshot.occupied_count(),
            "Replacing occupancy snapshot"
        );
        Ok(std::mem::replace(&mut self.snapshot, snapshot))
    }

    /// Generate and install a new snapshot in one step
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        policy: &GenerationPolicy,
        rng: &mut R,
        seed: Option<u64>,
    ) -> Result<&OccupancySnapshot, LayoutError> {
        let snapshot = self.generate_snapshot(policy, rng).with_seed(seed);
        self.replace(snapshot)?;
        info!(
            areas = self.areas.len(),
            slots = self.snapshot.len(),
            occupied = self.snapshot.occupied_count(),
            ?seed,
            "Yard occupancy regenerated"
        );
        Ok(&self.snapshot)
    }

    /// Pull a fresh snapshot from a data source, area by area
    pub fn refresh_from(&mut self, source: &dyn OccupancySource) -> Result<&OccupancySnapshot, Error> {
        let mut slots = Vec::new();
        for area in &self.areas {
            slots.extend(source.fetch_occupancy(area)?);
        }
        self.replace(OccupancySnapshot::new(slots).with_seed(source.seed()))?;
        Ok(&self.snapshot)
    }

    /// All slots belonging to one area
    pub fn slots_for<'a>(&'a self, area_id: &'a str) -> impl Iterator<Item = &'a SlotOccupancy> + 'a {
        self.snapshot.slots_for(area_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SlotPosition, StoredContainer};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use yard_types::ContainerType;

    fn areas() -> Vec<YardArea> {
        vec![
            YardArea::new("AA", "AA区", 2, 2, 2, "#ff6b6b"),
            YardArea::new("BB", "BB区", 3, 1, 3, "#4ecdc4"),
        ]
    }

    struct FloatingSource;

    impl OccupancySource for FloatingSource {
        fn fetch_occupancy(&self, area: &YardArea) -> Result<Vec<SlotOccupancy>, Error> {
            Ok(area
                .positions()
                .map(|p| {
                    if p.layer == 2 {
                        SlotOccupancy::occupied(
                            area.id.clone(),
                            p,
                            StoredContainer {
                                container_no: "X".to_string(),
                                container_type: ContainerType::Gp20,
                                customer: "马士基".to_string(),
                            },
                        )
                    } else {
                        SlotOccupancy::empty(area.id.clone(), p)
                    }
                })
                .collect())
        }
    }

    struct EmptySource;

    impl OccupancySource for EmptySource {
        fn fetch_occupancy(&self, area: &YardArea) -> Result<Vec<SlotOccupancy>, Error> {
            Ok(area
                .positions()
                .map(|p| SlotOccupancy::empty(area.id.clone(), p))
                .collect())
        }
    }

    struct SeededEmptySource(u64);

    impl OccupancySource for SeededEmptySource {
        fn fetch_occupancy(&self, area: &YardArea) -> Result<Vec<SlotOccupancy>, Error> {
            EmptySource.fetch_occupancy(area)
        }

        fn seed(&self) -> Option<u64> {
            Some(self.0)
        }
    }

    #[test]
    fn test_refresh_records_source_seed() {
        let mut model = YardGridModel::new(areas()).unwrap();
        model.refresh_from(&SeededEmptySource(42)).unwrap();
        assert_eq!(model.snapshot().seed(), Some(42));

        model.refresh_from(&EmptySource).unwrap();
        assert_eq!(model.snapshot().seed(), None);
    }

    #[test]
    fn test_new_rejects_invalid_area() {
        let result = YardGridModel::new(vec![YardArea::new("AA", "AA区", 0, 2, 2, "#ff6b6b")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_regenerate_installs_snapshot() {
        let mut model = YardGridModel::new(areas()).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        model
            .regenerate(&GenerationPolicy::default(), &mut rng, Some(5))
            .unwrap();
        assert_eq!(model.snapshot().len(), 8 + 9);
        assert_eq!(model.snapshot().seed(), Some(5));
        assert_eq!(model.slots_for("BB").count(), 9);
    }

    #[test]
    fn test_replace_keeps_old_snapshot_on_failure() {
        let mut model = YardGridModel::new(areas()).unwrap();
        model.refresh_from(&EmptySource).unwrap();
        let before = model.snapshot().clone();

        let err = model.refresh_from(&FloatingSource).unwrap_err();
        assert!(matches!(
            err,
            Error::Layout(LayoutError::FloatingContainer { .. })
        ));
        assert_eq!(model.snapshot(), &before);
    }

    #[test]
    fn test_replace_returns_previous() {
        let mut model = YardGridModel::new(areas()).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let first = model.generate_snapshot(&GenerationPolicy::default(), &mut rng);
        let first_slots = first.slots().to_vec();
        assert!(model.replace(first).unwrap().is_empty());

        let second = model.generate_snapshot(&GenerationPolicy::default(), &mut rng);
        let previous = model.replace(second).unwrap();
        assert_eq!(previous.slots(), first_slots.as_slice());
    }

    #[test]
    fn test_slot_lookup_through_model() {
        let mut model = YardGridModel::new(areas()).unwrap();
        model.refresh_from(&EmptySource).unwrap();
        assert!(model
            .snapshot()
            .slot_at("AA", SlotPosition::new(2, 2, 2))
            .is_some());
        assert!(model.area("CC").is_none());
    }
}
