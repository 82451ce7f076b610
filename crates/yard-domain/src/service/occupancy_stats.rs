//! Occupancy statistics derived from a snapshot

use std::collections::{HashMap, HashSet};

use crate::model::{
    AreaStats, AreaStatsEntry, CountEntry, LayerOccupancy, OccupancySnapshot, SlotPosition,
    YardArea, YardTotals,
};

/// Whole-percent share of `occupied` in `total`, rounded half-up; 0 when `total` is 0
pub fn occupancy_rate(occupied: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let (occupied, total) = (occupied as u64, total as u64);
    ((200 * occupied + total) / (2 * total)) as u32
}

fn stats_from_counts(total: usize, occupied: usize) -> AreaStats {
    AreaStats {
        total,
        occupied,
        available: total - occupied,
        occupancy_rate: occupancy_rate(occupied, total),
    }
}

/// Read-only statistics over one snapshot. Every method is a pure function of
/// the borrowed areas and snapshot.
pub struct OccupancyStatsCalculator<'a> {
    areas: &'a [YardArea],
    snapshot: &'a OccupancySnapshot,
}

impl<'a> OccupancyStatsCalculator<'a> {
    pub fn new(areas: &'a [YardArea], snapshot: &'a OccupancySnapshot) -> Self {
        Self { areas, snapshot }
    }

    pub fn compute_area_stats(&self, area_id: &str) -> AreaStats {
        let (total, occupied) = self
            .snapshot
            .slots_for(area_id)
            .fold((0, 0), |(total, occupied), slot| {
                (total + 1, occupied + usize::from(!slot.is_empty()))
            });
        stats_from_counts(total, occupied)
    }

    /// Stats for every configured area, in configuration order
    pub fn compute_all_area_stats(&self) -> Vec<AreaStatsEntry> {
        self.areas
            .iter()
            .map(|area| AreaStatsEntry {
                area_id: area.id.clone(),
                area_name: area.name.clone(),
                stats: self.compute_area_stats(&area.id),
            })
            .collect()
    }

    /// Yard-wide rollup; the rate is recomputed from the summed counts
    pub fn compute_totals(&self) -> YardTotals {
        let entries = self.compute_all_area_stats();
        let total = entries.iter().map(|e| e.stats.total).sum();
        let occupied = entries.iter().map(|e| e.stats.occupied).sum();
        YardTotals {
            area_count: entries.len(),
            stats: stats_from_counts(total, occupied),
        }
    }

    /// Occupied slots per container type, most common first
    pub fn container_type_breakdown(&self, area_id: &str) -> Vec<CountEntry> {
        let labels = self
            .snapshot
            .slots_for(area_id)
            .filter_map(|s| s.container_type())
            .map(|t| t.code().to_string());
        count_labels(labels)
    }

    /// Occupied slots per customer, most common first
    pub fn customer_breakdown(&self, area_id: &str) -> Vec<CountEntry> {
        let labels = self
            .snapshot
            .slots_for(area_id)
            .filter_map(|s| s.customer())
            .map(str::to_string);
        count_labels(labels)
    }

    /// Occupied count for each layer of the area, ground first
    pub fn layer_occupancy(&self, area_id: &str) -> Vec<LayerOccupancy> {
        let Some(area) = self.areas.iter().find(|a| a.id == area_id) else {
            return Vec::new();
        };
        let mut per_layer = vec![0usize; area.max_layers as usize];
        for slot in self.snapshot.slots_for(area_id).filter(|s| !s.is_empty()) {
            let index = (slot.position.layer as usize).checked_sub(1);
            if let Some(count) = index.and_then(|i| per_layer.get_mut(i)) {
                *count += 1;
            }
        }
        per_layer
            .into_iter()
            .enumerate()
            .map(|(i, occupied)| LayerOccupancy {
                layer: i as u32 + 1,
                occupied,
                capacity: area.cell_count(),
            })
            .collect()
    }

    /// Empty slots that can take a container right now: on the ground, or
    /// directly on top of an occupied slot. Sorted by row, column, layer.
    pub fn placeable_slots(&self, area_id: &str) -> Vec<SlotPosition> {
        let occupied: HashSet<SlotPosition> = self
            .snapshot
            .slots_for(area_id)
            .filter(|s| !s.is_empty())
            .map(|s| s.position)
            .collect();

        let mut placeable: Vec<SlotPosition> = self
            .snapshot
            .slots_for(area_id)
            .filter(|s| s.is_empty())
            .map(|s| s.position)
            .filter(|p| p.below().map_or(true, |below| occupied.contains(&below)))
            .collect();
        placeable.sort();
        placeable
    }
}

fn count_labels(labels: impl Iterator<Item = String>) -> Vec<CountEntry> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    let mut entries: Vec<CountEntry> = counts
        .into_iter()
        .map(|(label, count)| CountEntry { label, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{container_number, SlotOccupancy, StoredContainer};
    use yard_types::ContainerType;

    fn area() -> YardArea {
        YardArea::new("AA", "AA区", 2, 2, 2, "#ff6b6b")
    }

    fn container(position: SlotPosition, container_type: ContainerType, customer: &str) -> StoredContainer {
        StoredContainer {
            container_no: container_number("AA", position),
            container_type,
            customer: customer.to_string(),
        }
    }

    /// 2x2x2 area with (1,1) stacked two high and (2,2) holding one container
    fn snapshot() -> OccupancySnapshot {
        let slots = area()
            .positions()
            .map(|p| match (p.row, p.col, p.layer) {
                (1, 1, 1) => SlotOccupancy::occupied("AA", p, container(p, ContainerType::Gp40, "马士基")),
                (1, 1, 2) => SlotOccupancy::occupied("AA", p, container(p, ContainerType::Hc40, "中远海运")),
                (2, 2, 1) => SlotOccupancy::occupied("AA", p, container(p, ContainerType::Gp40, "中远海运")),
                _ => SlotOccupancy::empty("AA", p),
            })
            .collect();
        OccupancySnapshot::new(slots)
    }

    #[test]
    fn test_occupancy_rate_rounding() {
        assert_eq!(occupancy_rate(1, 8), 13);
        assert_eq!(occupancy_rate(2, 8), 25);
        assert_eq!(occupancy_rate(1, 3), 33);
        assert_eq!(occupancy_rate(2, 3), 67);
        assert_eq!(occupancy_rate(1, 200), 1);
        assert_eq!(occupancy_rate(0, 5), 0);
        assert_eq!(occupancy_rate(5, 5), 100);
        assert_eq!(occupancy_rate(0, 0), 0);
    }

    #[test]
    fn test_area_stats() {
        let areas = vec![area()];
        let snapshot = snapshot();
        let calc = OccupancyStatsCalculator::new(&areas, &snapshot);
        let stats = calc.compute_area_stats("AA");
        assert_eq!(
            stats,
            AreaStats {
                total: 8,
                occupied: 3,
                available: 5,
                occupancy_rate: 38
            }
        );
        assert_eq!(calc.compute_area_stats("AA"), stats);
    }

    #[test]
    fn test_unknown_area_is_all_zero() {
        let areas = vec![area()];
        let snapshot = snapshot();
        let calc = OccupancyStatsCalculator::new(&areas, &snapshot);
        assert_eq!(calc.compute_area_stats("ZZ"), AreaStats::default());
    }

    #[test]
    fn test_totals_recompute_rate() {
        let areas = vec![area(), YardArea::new("BB", "BB区", 1, 1, 2, "#4ecdc4")];
        let mut slots = snapshot().into_slots();
        slots.push(SlotOccupancy::empty("BB", SlotPosition::new(1, 1, 1)));
        slots.push(SlotOccupancy::empty("BB", SlotPosition::new(1, 1, 2)));
        let snapshot = OccupancySnapshot::new(slots);
        let calc = OccupancyStatsCalculator::new(&areas, &snapshot);

        let entries = calc.compute_all_area_stats();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].area_id, "AA");
        assert_eq!(entries[1].stats.occupancy_rate, 0);

        let totals = calc.compute_totals();
        assert_eq!(totals.area_count, 2);
        assert_eq!(totals.stats.total, 10);
        assert_eq!(totals.stats.occupied, 3);
        assert_eq!(totals.stats.occupancy_rate, 30);
    }

    #[test]
    fn test_breakdowns_sorted_by_count() {
        let areas = vec![area()];
        let snapshot = snapshot();
        let calc = OccupancyStatsCalculator::new(&areas, &snapshot);

        let types = calc.container_type_breakdown("AA");
        assert_eq!(types[0], CountEntry { label: "40GP".to_string(), count: 2 });
        assert_eq!(types[1], CountEntry { label: "40HC".to_string(), count: 1 });

        let customers = calc.customer_breakdown("AA");
        assert_eq!(customers[0].label, "中远海运");
        assert_eq!(customers[0].count, 2);
    }

    #[test]
    fn test_layer_occupancy() {
        let areas = vec![area()];
        let snapshot = snapshot();
        let calc = OccupancyStatsCalculator::new(&areas, &snapshot);
        let layers = calc.layer_occupancy("AA");
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0], LayerOccupancy { layer: 1, occupied: 2, capacity: 4 });
        assert_eq!(layers[1], LayerOccupancy { layer: 2, occupied: 1, capacity: 4 });
        assert!(calc.layer_occupancy("ZZ").is_empty());
    }

    #[test]
    fn test_layer_occupancy_ignores_layer_zero() {
        let areas = vec![area()];
        let bad = SlotPosition::new(1, 2, 0);
        let mut slots = snapshot().slots().to_vec();
        slots.push(SlotOccupancy::occupied("AA", bad, container(bad, ContainerType::Gp20, "马士基")));
        let snapshot = OccupancySnapshot::new(slots);
        let layers = OccupancyStatsCalculator::new(&areas, &snapshot).layer_occupancy("AA");
        assert_eq!(layers[0].occupied, 2);
        assert_eq!(layers[1].occupied, 1);
    }

    #[test]
    fn test_placeable_slots() {
        let areas = vec![area()];
        let snapshot = snapshot();
        let calc = OccupancyStatsCalculator::new(&areas, &snapshot);
        let placeable = calc.placeable_slots("AA");
        assert_eq!(
            placeable,
            vec![
                SlotPosition::new(1, 2, 1),
                SlotPosition::new(2, 1, 1),
                SlotPosition::new(2, 2, 2),
            ]
        );
    }
}
