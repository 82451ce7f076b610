//! Structural checks on occupancy snapshots

use std::collections::{HashMap, HashSet};

use yard_types::LayoutError;

use crate::model::{OccupancySnapshot, SlotOccupancy, SlotPosition, YardArea};

/// Occupied slots above the ground whose slot below is missing or empty
pub fn find_floating_slots(snapshot: &OccupancySnapshot) -> Vec<&SlotOccupancy> {
    let occupied: HashSet<(&str, SlotPosition)> = snapshot
        .slots()
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| (s.area_id.as_str(), s.position))
        .collect();

    snapshot
        .slots()
        .iter()
        .filter(|s| !s.is_empty())
        .filter(|s| match s.position.below() {
            Some(below) => !occupied.contains(&(s.area_id.as_str(), below)),
            None => false,
        })
        .collect()
}

/// Check that a snapshot covers exactly the configured areas:
/// every slot inside its area's bounds, no duplicates, every area complete,
/// and no container resting on an empty slot.
pub fn validate_snapshot(areas: &[YardArea], snapshot: &OccupancySnapshot) -> Result<(), LayoutError> {
    let by_id: HashMap<&str, &YardArea> = areas.iter().map(|a| (a.id.as_str(), a)).collect();
    let mut seen: HashSet<(&str, SlotPosition)> = HashSet::with_capacity(snapshot.len());
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for slot in snapshot.slots() {
        let area = by_id
            .get(slot.area_id.as_str())
            .ok_or_else(|| LayoutError::UnknownArea(slot.area_id.clone()))?;
        let p = slot.position;
        if !area.contains(p) {
            return Err(LayoutError::SlotOutOfBounds {
                area_id: slot.area_id.clone(),
                row: p.row,
                col: p.col,
                layer: p.layer,
            });
        }
        if !seen.insert((slot.area_id.as_str(), p)) {
            return Err(LayoutError::DuplicateSlot {
                area_id: slot.area_id.clone(),
                row: p.row,
                col: p.col,
                layer: p.layer,
            });
        }
        *counts.entry(area.id.as_str()).or_default() += 1;
    }

    for area in areas {
        let actual = counts.get(area.id.as_str()).copied().unwrap_or(0);
        if actual != area.slot_count() {
            return Err(LayoutError::IncompleteArea {
                area_id: area.id.clone(),
                expected: area.slot_count(),
                actual,
            });
        }
    }

    if let Some(slot) = find_floating_slots(snapshot).first() {
        return Err(LayoutError::FloatingContainer {
            area_id: slot.area_id.clone(),
            row: slot.position.row,
            col: slot.position.col,
            layer: slot.position.layer,
        });
    }

    Ok(())
}
