//! View configuration for the pseudo-3D yard projection

use serde::{Deserialize, Serialize};

pub const ZOOM_MIN: u32 = 50;
pub const ZOOM_MAX: u32 = 200;
pub const ZOOM_STEP: u32 = 10;
pub const DEFAULT_ZOOM: u32 = 100;

/// Rotation angles in degrees. These only bias a 2D offset; there is no real 3D camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewAngle {
    pub name: String,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub rotate_z: f64,
}

/// Named viewing presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewPreset {
    #[default]
    BirdsEye,
    Front,
    Side,
    Isometric,
}

impl ViewPreset {
    pub const ALL: [ViewPreset; 4] = [
        ViewPreset::BirdsEye,
        ViewPreset::Front,
        ViewPreset::Side,
        ViewPreset::Isometric,
    ];

    /// Display label in Chinese
    pub fn label(&self) -> &'static str {
        match self {
            ViewPreset::BirdsEye => "鸟瞰视图",
            ViewPreset::Front => "正面视图",
            ViewPreset::Side => "侧面视图",
            ViewPreset::Isometric => "立体视图",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ViewPreset::BirdsEye => "birds_eye",
            ViewPreset::Front => "front",
            ViewPreset::Side => "side",
            ViewPreset::Isometric => "isometric",
        }
    }

    /// (rotate_x, rotate_y, rotate_z) in degrees
    pub fn rotation(&self) -> (f64, f64, f64) {
        match self {
            ViewPreset::BirdsEye => (45.0, 0.0, 45.0),
            ViewPreset::Front => (0.0, 0.0, 0.0),
            ViewPreset::Side => (0.0, 90.0, 0.0),
            ViewPreset::Isometric => (30.0, 30.0, 15.0),
        }
    }

    pub fn angle(&self) -> ViewAngle {
        let (rotate_x, rotate_y, rotate_z) = self.rotation();
        ViewAngle {
            name: self.label().to_string(),
            rotate_x,
            rotate_y,
            rotate_z,
        }
    }
}

impl std::str::FromStr for ViewPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ViewPreset::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(needle) || p.label() == needle)
            .ok_or_else(|| {
                let keys: Vec<_> = ViewPreset::ALL.iter().map(|p| p.key()).collect();
                format!("unknown view preset '{}' (expected one of: {})", s, keys.join(", "))
            })
    }
}

impl std::fmt::Display for ViewPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Transient view state for one rendering surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfiguration {
    pub angle: ViewAngle,
    /// Zoom percentage; out-of-range values are clamped when read
    pub zoom: u32,
    pub selected_area: String,
    /// When set, only stacks up to this layer are drawn
    #[serde(default)]
    pub current_layer: Option<u32>,
}

impl ViewConfiguration {
    pub fn new(selected_area: impl Into<String>) -> Self {
        Self {
            angle: ViewPreset::default().angle(),
            zoom: DEFAULT_ZOOM,
            selected_area: selected_area.into(),
            current_layer: None,
        }
    }

    pub fn with_preset(mut self, preset: ViewPreset) -> Self {
        self.angle = preset.angle();
        self
    }

    pub fn with_zoom(mut self, zoom: u32) -> Self {
        self.set_zoom(zoom);
        self
    }

    pub fn with_layer(mut self, layer: Option<u32>) -> Self {
        self.current_layer = layer;
        self
    }

    pub fn set_zoom(&mut self, zoom: u32) {
        self.zoom = clamp_zoom(zoom);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom.saturating_add(ZOOM_STEP));
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom.saturating_sub(ZOOM_STEP));
    }

    /// Zoom clamped to the supported range
    pub fn effective_zoom(&self) -> u32 {
        clamp_zoom(self.zoom)
    }

    /// Zoom as a scale factor (1.0 == 100%)
    pub fn scale(&self) -> f32 {
        self.effective_zoom() as f32 / 100.0
    }
}

pub fn clamp_zoom(zoom: u32) -> u32 {
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_clamped() {
        let view = ViewConfiguration::new("AA").with_zoom(500);
        assert_eq!(view.zoom, ZOOM_MAX);
        let view = ViewConfiguration::new("AA").with_zoom(10);
        assert_eq!(view.zoom, ZOOM_MIN);
    }

    #[test]
    fn test_raw_zoom_clamped_on_read() {
        let mut view = ViewConfiguration::new("AA");
        view.zoom = 0;
        assert_eq!(view.effective_zoom(), ZOOM_MIN);
        assert!((view.scale() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zoom_steps() {
        let mut view = ViewConfiguration::new("AA");
        view.zoom_in();
        assert_eq!(view.zoom, 110);
        view.set_zoom(ZOOM_MIN);
        view.zoom_out();
        assert_eq!(view.zoom, ZOOM_MIN);
    }

    #[test]
    fn test_preset_parse() {
        assert_eq!("front".parse::<ViewPreset>(), Ok(ViewPreset::Front));
        assert_eq!("ISOMETRIC".parse::<ViewPreset>(), Ok(ViewPreset::Isometric));
        assert_eq!("侧面视图".parse::<ViewPreset>(), Ok(ViewPreset::Side));
        assert!("top".parse::<ViewPreset>().is_err());
    }

    #[test]
    fn test_default_view_is_birds_eye() {
        let view = ViewConfiguration::new("AA");
        assert_eq!(view.angle, ViewPreset::BirdsEye.angle());
        assert_eq!(view.angle.rotate_x, 45.0);
        assert_eq!(view.current_layer, None);
    }
}
