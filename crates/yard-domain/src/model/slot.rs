//! Slot addressing and occupancy records

use serde::{Deserialize, Serialize};
use yard_types::ContainerType;

/// Position of a slot inside an area. All coordinates are 1-based; layer 1 is ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotPosition {
    pub row: u32,
    pub col: u32,
    pub layer: u32,
}

impl SlotPosition {
    pub const fn new(row: u32, col: u32, layer: u32) -> Self {
        Self { row, col, layer }
    }

    /// The slot directly underneath, or None on the ground layer
    pub fn below(&self) -> Option<SlotPosition> {
        (self.layer > 1).then(|| SlotPosition::new(self.row, self.col, self.layer - 1))
    }
}

impl std::fmt::Display for SlotPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}-{:02}", self.row, self.col, self.layer)
    }
}

/// Container held in an occupied slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredContainer {
    pub container_no: String,
    pub container_type: ContainerType,
    pub customer: String,
}

/// Occupancy record for one slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotOccupancy {
    pub area_id: String,
    #[serde(flatten)]
    pub position: SlotPosition,
    /// None when the slot is empty
    #[serde(default)]
    pub container: Option<StoredContainer>,
}

impl SlotOccupancy {
    pub fn empty(area_id: impl Into<String>, position: SlotPosition) -> Self {
        Self {
            area_id: area_id.into(),
            position,
            container: None,
        }
    }

    pub fn occupied(
        area_id: impl Into<String>,
        position: SlotPosition,
        container: StoredContainer,
    ) -> Self {
        Self {
            area_id: area_id.into(),
            position,
            container: Some(container),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.container.is_none()
    }

    pub fn container_no(&self) -> Option<&str> {
        self.container.as_ref().map(|c| c.container_no.as_str())
    }

    pub fn container_type(&self) -> Option<ContainerType> {
        self.container.as_ref().map(|c| c.container_type)
    }

    pub fn customer(&self) -> Option<&str> {
        self.container.as_ref().map(|c| c.customer.as_str())
    }
}

/// Container number derived from its slot: area id followed by
/// zero-padded row, column and layer (e.g. `AA010203`)
pub fn container_number(area_id: &str, position: SlotPosition) -> String {
    format!(
        "{}{:02}{:02}{:02}",
        area_id, position.row, position.col, position.layer
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_number_format() {
        assert_eq!(container_number("AA", SlotPosition::new(1, 2, 3)), "AA010203");
        assert_eq!(container_number("DD", SlotPosition::new(12, 18, 6)), "DD121806");
    }

    #[test]
    fn test_below() {
        assert_eq!(SlotPosition::new(1, 1, 1).below(), None);
        assert_eq!(
            SlotPosition::new(3, 4, 2).below(),
            Some(SlotPosition::new(3, 4, 1))
        );
    }

    #[test]
    fn test_empty_slot_has_no_container_fields() {
        let slot = SlotOccupancy::empty("AA", SlotPosition::new(1, 1, 1));
        assert!(slot.is_empty());
        assert_eq!(slot.container_no(), None);
        assert_eq!(slot.container_type(), None);
        assert_eq!(slot.customer(), None);
    }

    #[test]
    fn test_serialized_layout_is_flat() {
        let slot = SlotOccupancy::empty("AA", SlotPosition::new(1, 2, 1));
        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json["area_id"], "AA");
        assert_eq!(json["row"], 1);
        assert_eq!(json["col"], 2);
        assert!(json["container"].is_null());
    }
}
