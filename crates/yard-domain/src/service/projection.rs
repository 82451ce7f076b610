//! Pseudo-3D projection of an area into 2D draw primitives
//!
//! This is a flat oblique approximation: each stacking layer is shifted by an
//! offset biased with the view's rotation angles. It is not a camera transform.

use serde::{Deserialize, Serialize};

use crate::model::{Rgba, SlotOccupancy, SlotPosition, ViewConfiguration, YardArea};

use super::grid_model::YardGridModel;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Drawing surface extent in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Horizontal alignment of a text primitive around its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Center,
    Right,
}

/// One drawing instruction for a 2D surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawPrimitive {
    Line {
        from: Point,
        to: Point,
        color: Rgba,
        width: f32,
    },
    Rect {
        slot: SlotPosition,
        origin: Point,
        width: f32,
        height: f32,
        fill: Rgba,
        /// Fill opacity (0.0-1.0)
        opacity: f32,
        border: Rgba,
        border_width: f32,
    },
    Text {
        position: Point,
        text: String,
        size: f32,
        color: Rgba,
        anchor: TextAnchor,
    },
}

/// Ordered draw primitives; later entries paint over earlier ones
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    pub primitives: Vec<DrawPrimitive>,
}

impl DrawList {
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawPrimitive> {
        self.primitives.iter()
    }

    pub fn push(&mut self, primitive: DrawPrimitive) {
        self.primitives.push(primitive);
    }

    /// Container rectangles in draw order
    pub fn rects(&self) -> impl Iterator<Item = &DrawPrimitive> + '_ {
        self.primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Rect { .. }))
    }

    pub fn line_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Line { .. }))
            .count()
    }

    pub fn text_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Text { .. }))
            .count()
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawPrimitive;
    type IntoIter = std::slice::Iter<'a, DrawPrimitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.primitives.iter()
    }
}

/// Turns the grid model plus a view into draw primitives
pub trait ProjectionRenderer {
    /// Render the selected area. An unknown area yields an empty list.
    fn render(&self, model: &YardGridModel, view: &ViewConfiguration, surface: Surface) -> DrawList;
}

/// Oblique offset projection used by the yard view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObliqueProjection {
    /// Extra cells of breathing room around the grid when sizing cells
    pub margin_cells: f32,
    /// Per-layer shift as a fraction of the cell size
    pub depth_factor: f32,
    /// Inset of each container rectangle inside its cell, in pixels
    pub cell_padding: f32,
    /// Distance of row/column labels from the grid edge, in pixels
    pub label_gap: f32,
}

impl Default for ObliqueProjection {
    fn default() -> Self {
        Self {
            margin_cells: 4.0,
            // 0.3 of a container height, containers being 0.8 of a cell tall
            depth_factor: 0.24,
            cell_padding: 2.0,
            label_gap: 10.0,
        }
    }
}

impl ObliqueProjection {
    fn cell_size(&self, area: &YardArea, view: &ViewConfiguration, surface: Surface) -> f32 {
        let by_width = surface.width / (area.cols as f32 + self.margin_cells);
        let by_height = surface.height / (area.rows as f32 + self.margin_cells);
        by_width.min(by_height) * view.scale()
    }

    /// Screen offset of a layer relative to the ground cell
    pub fn layer_offset(&self, layer: u32, cell_size: f32, view: &ViewConfiguration) -> (f32, f32) {
        let layer_offset = layer.saturating_sub(1) as f32 * cell_size * self.depth_factor;
        let offset_x = (view.angle.rotate_y.to_radians().cos() as f32) * layer_offset * 0.5;
        let offset_y = (view.angle.rotate_x.to_radians().sin() as f32) * layer_offset * 0.8;
        (offset_x, offset_y)
    }

    fn render_area<'a>(
        &self,
        area: &YardArea,
        slots: impl Iterator<Item = &'a SlotOccupancy>,
        view: &ViewConfiguration,
        surface: Surface,
    ) -> DrawList {
        let mut list = DrawList::default();
        let cell = self.cell_size(area, view, surface);
        if !(cell.is_finite() && cell > 0.0) {
            return list;
        }

        let grid_width = area.cols as f32 * cell;
        let grid_height = area.rows as f32 * cell;
        let start_x = surface.width / 2.0 - grid_width / 2.0;
        let start_y = surface.height / 2.0 - grid_height / 2.0;

        // Ground plane
        for row in 0..=area.rows {
            let y = start_y + row as f32 * cell;
            list.push(DrawPrimitive::Line {
                from: Point::new(start_x, y),
                to: Point::new(start_x + grid_width, y),
                color: Rgba::GRID_LINE,
                width: 1.0,
            });
        }
        for col in 0..=area.cols {
            let x = start_x + col as f32 * cell;
            list.push(DrawPrimitive::Line {
                from: Point::new(x, start_y),
                to: Point::new(x, start_y + grid_height),
                color: Rgba::GRID_LINE,
                width: 1.0,
            });
        }

        // Containers, lower layers first so upper layers paint over them
        let mut stacked: Vec<&SlotOccupancy> = slots
            .filter(|s| !s.is_empty())
            .filter(|s| view.current_layer.map_or(true, |max| s.position.layer <= max))
            .collect();
        stacked.sort_by_key(|s| (s.position.layer, s.position.row, s.position.col));

        let fill = area.rgba();
        let size = (cell - 2.0 * self.cell_padding).max(0.0);
        for slot in stacked {
            let p = slot.position;
            let x = start_x + (p.col - 1) as f32 * cell;
            let y = start_y + (p.row - 1) as f32 * cell;
            let (offset_x, offset_y) = self.layer_offset(p.layer, cell, view);
            let draw_x = x + offset_x;
            let draw_y = y - offset_y;

            list.push(DrawPrimitive::Rect {
                slot: p,
                origin: Point::new(draw_x + self.cell_padding, draw_y + self.cell_padding),
                width: size,
                height: size,
                fill,
                opacity: (0.7 + (p.layer - 1) as f32 * 0.1).min(1.0),
                border: Rgba::CONTAINER_BORDER,
                border_width: 2.0,
            });

            if p.layer > 1 {
                list.push(DrawPrimitive::Text {
                    position: Point::new(draw_x + cell / 2.0, draw_y + cell / 2.0),
                    text: p.layer.to_string(),
                    size: cell * 0.2,
                    color: Rgba::LAYER_LABEL,
                    anchor: TextAnchor::Center,
                });
            }
        }

        // Axis labels
        let label_size = (cell * 0.15).max(12.0);
        for col in 1..=area.cols {
            list.push(DrawPrimitive::Text {
                position: Point::new(start_x + (col as f32 - 0.5) * cell, start_y - self.label_gap),
                text: format!("{:02}", col),
                size: label_size,
                color: Rgba::AXIS_LABEL,
                anchor: TextAnchor::Center,
            });
        }
        for row in 1..=area.rows {
            list.push(DrawPrimitive::Text {
                position: Point::new(start_x - self.label_gap, start_y + (row as f32 - 0.5) * cell + 5.0),
                text: format!("{:02}", row),
                size: label_size,
                color: Rgba::AXIS_LABEL,
                anchor: TextAnchor::Right,
            });
        }

        list
    }
}

impl ProjectionRenderer for ObliqueProjection {
    fn render(&self, model: &YardGridModel, view: &ViewConfiguration, surface: Surface) -> DrawList {
        match model.area(&view.selected_area) {
            Some(area) => self.render_area(area, model.slots_for(&area.id), view, surface),
            None => DrawList::default(),
        }
    }
}
