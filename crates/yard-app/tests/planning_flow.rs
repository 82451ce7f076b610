//! Config -> service -> stats / render / export

use std::fs;

use tempfile::tempdir;
use yard_app::app::YardPlanningService;
use yard_app::config::Config;
use yard_app::export::{export_layout_to_csv, export_layout_to_excel};
use yard_domain::model::{ViewConfiguration, ViewPreset};
use yard_domain::service::Surface;

const AREAS: &str = r##"
[[areas]]
id = "AA"
name = "AA区"
rows = 4
cols = 6
max_layers = 3
color = "#ff6b6b"

[[areas]]
id = "BB"
name = "BB区"
rows = 3
cols = 5
max_layers = 2
color = "#4ecdc4"
"##;

fn config_with_areas(dir: &std::path::Path) -> Config {
    let areas_path = dir.join("areas.toml");
    fs::write(&areas_path, AREAS).unwrap();
    Config {
        areas_file: Some(areas_path),
        seed: Some(2024),
        ..Default::default()
    }
}

#[test]
fn test_service_from_config() {
    let dir = tempdir().unwrap();
    let config = config_with_areas(dir.path());
    let service = YardPlanningService::from_config(&config).unwrap();

    assert_eq!(service.areas().len(), 2);
    assert_eq!(service.seed(), Some(2024));
    assert_eq!(service.snapshot().len(), 72 + 30);

    let stats = service.area_stats("AA").unwrap();
    assert_eq!(stats.total, 72);
    assert_eq!(stats.occupied + stats.available, 72);
}

#[test]
fn test_render_draws_one_rect_per_occupied_slot() {
    let dir = tempdir().unwrap();
    let service = YardPlanningService::from_config(&config_with_areas(dir.path())).unwrap();

    let view = ViewConfiguration::new("AA").with_preset(ViewPreset::Isometric);
    let list = service.render(&view, Surface::new(900.0, 600.0));

    let occupied = service.area_stats("AA").unwrap().occupied;
    assert_eq!(list.rects().count(), occupied);
    // grid lines: (rows + 1) + (cols + 1)
    assert_eq!(list.line_count(), 5 + 7);
}

#[test]
fn test_export_both_formats() {
    let dir = tempdir().unwrap();
    let service = YardPlanningService::from_config(&config_with_areas(dir.path())).unwrap();

    let csv_path = dir.path().join("layout.csv");
    let rows = export_layout_to_csv(service.areas(), service.snapshot(), &csv_path).unwrap();
    assert_eq!(rows, 102);
    assert_eq!(fs::read_to_string(&csv_path).unwrap().lines().count(), 103);

    let xlsx_path = dir.path().join("layout.xlsx");
    export_layout_to_excel(service.areas(), service.snapshot(), &xlsx_path).unwrap();
    assert!(xlsx_path.exists());
}

#[test]
fn test_missing_areas_file_is_config_error() {
    let config = Config {
        areas_file: Some(std::path::PathBuf::from("/nonexistent/areas.toml")),
        ..Default::default()
    };
    assert!(YardPlanningService::from_config(&config).is_err());
}
