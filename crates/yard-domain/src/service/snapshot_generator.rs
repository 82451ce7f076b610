//! Randomised occupancy generation standing in for live yard data

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;
use yard_types::{ContainerType, LayoutError};

use crate::model::{
    container_number, OccupancySnapshot, SlotOccupancy, SlotPosition, StoredContainer, YardArea,
};

pub const DEFAULT_MIN_OCCUPANCY: f64 = 0.2;
pub const DEFAULT_MAX_OCCUPANCY: f64 = 0.9;

pub const DEFAULT_CUSTOMERS: &[&str] = &["上海远洋", "马士基", "中远海运", "东方海外"];

/// How a snapshot is filled
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationPolicy {
    /// Lower bound of the per-area target occupancy (0.0-1.0)
    pub min_rate: f64,
    /// Upper bound of the per-area target occupancy (0.0-1.0)
    pub max_rate: f64,
    pub container_types: Vec<ContainerType>,
    pub customers: Vec<String>,
}

impl GenerationPolicy {
    pub fn new(min_rate: f64, max_rate: f64) -> Result<Self, LayoutError> {
        if !(0.0..=1.0).contains(&min_rate)
            || !(0.0..=1.0).contains(&max_rate)
            || min_rate > max_rate
        {
            return Err(LayoutError::InvalidOccupancyRange {
                min: min_rate,
                max: max_rate,
            });
        }
        Ok(Self {
            min_rate,
            max_rate,
            ..Default::default()
        })
    }

    pub fn with_customers(mut self, customers: Vec<String>) -> Self {
        if !customers.is_empty() {
            self.customers = customers;
        }
        self
    }
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            min_rate: DEFAULT_MIN_OCCUPANCY,
            max_rate: DEFAULT_MAX_OCCUPANCY,
            container_types: ContainerType::ALL.to_vec(),
            customers: DEFAULT_CUSTOMERS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Generate the slots of one area.
///
/// A target rate is drawn once per area. Cells are visited row-major and each
/// cell's layers bottom-up, so the layer below is always decided first: a slot
/// is only filled when the slot underneath holds a container.
pub fn generate_area_slots<R: Rng + ?Sized>(
    area: &YardArea,
    policy: &GenerationPolicy,
    rng: &mut R,
) -> Vec<SlotOccupancy> {
    let target_rate = rng.gen_range(policy.min_rate..=policy.max_rate);
    let mut slots = Vec::with_capacity(area.slot_count());

    for row in 1..=area.rows {
        for col in 1..=area.cols {
            let mut below_occupied = true;
            for layer in 1..=area.max_layers {
                let position = SlotPosition::new(row, col, layer);
                let roll: f64 = rng.gen();
                let occupied = below_occupied && roll < target_rate;

                if occupied {
                    let container = StoredContainer {
                        container_no: container_number(&area.id, position),
                        container_type: policy
                            .container_types
                            .choose(rng)
                            .copied()
                            .unwrap_or(ContainerType::Gp20),
                        customer: policy.customers.choose(rng).cloned().unwrap_or_default(),
                    };
                    slots.push(SlotOccupancy::occupied(area.id.clone(), position, container));
                } else {
                    slots.push(SlotOccupancy::empty(area.id.clone(), position));
                }
                below_occupied = occupied;
            }
        }
    }

    debug!(
        area = %area.id,
        target_rate,
        slots = slots.len(),
        occupied = slots.iter().filter(|s| !s.is_empty()).count(),
        "Generated area occupancy"
    );
    slots
}

/// Generate a fresh snapshot covering every area, in configuration order
pub fn generate_snapshot<R: Rng + ?Sized>(
    areas: &[YardArea],
    policy: &GenerationPolicy,
    rng: &mut R,
) -> OccupancySnapshot {
    let slots = areas
        .iter()
        .flat_map(|area| generate_area_slots(area, policy, rng))
        .collect();
    OccupancySnapshot::new(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn area() -> YardArea {
        YardArea::new("AA", "AA区", 8, 12, 4, "#ff6b6b")
    }

    #[test]
    fn test_generates_every_slot_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let slots = generate_area_slots(&area(), &GenerationPolicy::default(), &mut rng);
        assert_eq!(slots.len(), 8 * 12 * 4);
        let unique: std::collections::HashSet<_> = slots.iter().map(|s| s.position).collect();
        assert_eq!(unique.len(), slots.len());
    }

    #[test]
    fn test_full_rate_fills_everything() {
        let policy = GenerationPolicy::new(1.0, 1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let slots = generate_area_slots(&area(), &policy, &mut rng);
        assert!(slots.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn test_zero_rate_leaves_everything_empty() {
        let policy = GenerationPolicy::new(0.0, 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let slots = generate_area_slots(&area(), &policy, &mut rng);
        assert!(slots.iter().all(|s| s.is_empty()));
    }

    #[test]
    fn test_occupied_slots_carry_container_fields() {
        let policy = GenerationPolicy::new(1.0, 1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let slots = generate_area_slots(&area(), &policy, &mut rng);
        let slot = &slots[5];
        assert_eq!(slot.container_no(), Some(container_number("AA", slot.position).as_str()));
        assert!(DEFAULT_CUSTOMERS.contains(&slot.customer().unwrap()));
        assert!(slot.container_type().is_some());
    }

    #[test]
    fn test_same_seed_same_snapshot() {
        let areas = vec![area(), YardArea::new("CC", "CC区", 6, 10, 3, "#45b7d1")];
        let policy = GenerationPolicy::default();
        let a = generate_snapshot(&areas, &policy, &mut StdRng::seed_from_u64(99));
        let b = generate_snapshot(&areas, &policy, &mut StdRng::seed_from_u64(99));
        assert_eq!(a.slots(), b.slots());
    }

    #[test]
    fn test_policy_rejects_bad_range() {
        assert!(GenerationPolicy::new(0.9, 0.2).is_err());
        assert!(GenerationPolicy::new(-0.1, 0.5).is_err());
        assert!(GenerationPolicy::new(0.5, 1.5).is_err());
        assert!(GenerationPolicy::new(0.3, 0.3).is_ok());
    }

    #[test]
    fn test_empty_customer_list_keeps_defaults() {
        let policy = GenerationPolicy::default().with_customers(Vec::new());
        assert_eq!(policy.customers.len(), DEFAULT_CUSTOMERS.len());
    }
}
