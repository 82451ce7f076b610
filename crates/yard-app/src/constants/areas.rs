//! The five yard areas used when no area file is configured

use yard_domain::model::YardArea;

pub const DEFAULT_AREA_ID: &str = "AA";

/// (id, name, rows, cols, max_layers, color)
const AREA_TABLE: [(&str, &str, u32, u32, u32, &str); 5] = [
    ("AA", "AA区", 8, 12, 4, "#ff6b6b"),
    ("BB", "BB区", 10, 15, 5, "#4ecdc4"),
    ("CC", "CC区", 6, 10, 3, "#45b7d1"),
    ("DD", "DD区", 12, 18, 6, "#96ceb4"),
    ("EE", "EE区", 8, 14, 4, "#feca57"),
];

pub fn default_areas() -> Vec<YardArea> {
    AREA_TABLE
        .iter()
        .map(|&(id, name, rows, cols, layers, color)| YardArea::new(id, name, rows, cols, layers, color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use yard_domain::model::validate_areas;

    #[test]
    fn test_default_areas_are_valid() {
        let areas = default_areas();
        assert_eq!(areas.len(), 5);
        assert!(validate_areas(&areas).is_ok());
        assert_eq!(areas[0].id, DEFAULT_AREA_ID);
    }

    #[test]
    fn test_default_capacity() {
        let total: usize = default_areas().iter().map(|a| a.slot_count()).sum();
        // 384 + 750 + 180 + 1296 + 448
        assert_eq!(total, 3058);
    }
}
