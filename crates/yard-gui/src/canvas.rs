//! Paints renderer draw primitives with the egui painter

use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, StrokeKind, Vec2};
use yard_domain::model::Rgba;
use yard_domain::service::{DrawList, DrawPrimitive, Point, TextAnchor};

pub fn to_color32(color: Rgba, opacity: f32) -> Color32 {
    let alpha = (color.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, alpha)
}

fn to_pos(origin: Pos2, point: Point) -> Pos2 {
    origin + Vec2::new(point.x, point.y)
}

fn align(anchor: TextAnchor) -> Align2 {
    match anchor {
        TextAnchor::Center => Align2::CENTER_CENTER,
        TextAnchor::Right => Align2::RIGHT_CENTER,
    }
}

/// Paint every primitive in order, offset by the canvas origin
pub fn paint_draw_list(painter: &Painter, origin: Pos2, list: &DrawList) {
    for primitive in list {
        match primitive {
            DrawPrimitive::Line {
                from,
                to,
                color,
                width,
            } => {
                painter.line_segment(
                    [to_pos(origin, *from), to_pos(origin, *to)],
                    Stroke::new(*width, to_color32(*color, 1.0)),
                );
            }
            DrawPrimitive::Rect {
                origin: top_left,
                width,
                height,
                fill,
                opacity,
                border,
                border_width,
                ..
            } => {
                let rect = Rect::from_min_size(to_pos(origin, *top_left), Vec2::new(*width, *height));
                painter.rect_filled(rect, 2.0, to_color32(*fill, *opacity));
                painter.rect_stroke(
                    rect,
                    2.0,
                    Stroke::new(*border_width, to_color32(*border, 1.0)),
                    StrokeKind::Inside,
                );
            }
            DrawPrimitive::Text {
                position,
                text,
                size,
                color,
                anchor,
            } => {
                painter.text(
                    to_pos(origin, *position),
                    align(*anchor),
                    text,
                    FontId::proportional(*size),
                    to_color32(*color, 1.0),
                );
            }
        }
    }
}
