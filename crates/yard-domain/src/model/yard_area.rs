//! Yard area definitions

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use yard_types::LayoutError;

use super::color::Rgba;
use super::slot::SlotPosition;

/// A named rectangular yard zone with a fixed stack height
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YardArea {
    /// Short unique code (e.g., "AA")
    pub id: String,
    /// Display label (e.g., "AA区")
    pub name: String,
    pub rows: u32,
    pub cols: u32,
    /// Maximum stack height
    #[serde(alias = "maxLayers")]
    pub max_layers: u32,
    /// Display colour as `#rrggbb`
    pub color: String,
}

impl YardArea {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rows: u32,
        cols: u32,
        max_layers: u32,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rows,
            cols,
            max_layers,
            color: color.into(),
        }
    }

    /// Number of addressable slots (rows x cols x layers)
    pub fn slot_count(&self) -> usize {
        self.rows as usize * self.cols as usize * self.max_layers as usize
    }

    /// Number of ground cells (rows x cols)
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    pub fn contains(&self, position: SlotPosition) -> bool {
        (1..=self.rows).contains(&position.row)
            && (1..=self.cols).contains(&position.col)
            && (1..=self.max_layers).contains(&position.layer)
    }

    /// All slot positions in row-major order, layers ascending within each cell
    pub fn positions(&self) -> impl Iterator<Item = SlotPosition> + '_ {
        (1..=self.rows).flat_map(move |row| {
            (1..=self.cols).flat_map(move |col| {
                (1..=self.max_layers).map(move |layer| SlotPosition::new(row, col, layer))
            })
        })
    }

    /// Parsed display colour; falls back to grey for malformed values
    pub fn rgba(&self) -> Rgba {
        Rgba::parse_hex(&self.color).unwrap_or(Rgba::rgb(0x99, 0x99, 0x99))
    }

    /// Check configured dimensions and colour
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.rows == 0 || self.cols == 0 || self.max_layers == 0 {
            return Err(LayoutError::InvalidDimensions {
                area_id: self.id.clone(),
                rows: self.rows,
                cols: self.cols,
                max_layers: self.max_layers,
            });
        }
        if Rgba::parse_hex(&self.color).is_none() {
            return Err(LayoutError::InvalidColor {
                area_id: self.id.clone(),
                color: self.color.clone(),
            });
        }
        Ok(())
    }
}

/// Validate every area and reject duplicate ids
pub fn validate_areas(areas: &[YardArea]) -> Result<(), LayoutError> {
    let mut seen = HashSet::new();
    for area in areas {
        area.validate()?;
        if !seen.insert(area.id.as_str()) {
            return Err(LayoutError::DuplicateArea(area.id.clone()));
        }
    }
    Ok(())
}

pub fn find_area<'a>(areas: &'a [YardArea], area_id: &str) -> Option<&'a YardArea> {
    areas.iter().find(|a| a.id == area_id)
}
