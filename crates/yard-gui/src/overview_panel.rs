//! Area overview: occupancy table for every area plus a per-area breakdown

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use yard_app::app::YardPlanningService;
use yard_types::OccupancyLevel;

/// Tag colour for an occupancy level
pub fn level_color(level: OccupancyLevel) -> Color32 {
    match level {
        OccupancyLevel::High => Color32::from_rgb(0xf5, 0x6c, 0x6c),
        OccupancyLevel::Medium => Color32::from_rgb(0xe6, 0xa2, 0x3c),
        OccupancyLevel::Low => Color32::from_rgb(0x67, 0xc2, 0x3a),
    }
}

pub struct OverviewPanel {
    /// Area whose breakdown is shown below the table
    selected_area: Option<String>,
}

impl OverviewPanel {
    pub fn new() -> Self {
        Self {
            selected_area: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, service: &YardPlanningService) {
        ui.heading("区域概览");
        ui.add_space(8.0);

        let entries = service.overview();
        let totals = service.totals();

        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(60.0))
            .column(Column::exact(90.0))
            .columns(Column::exact(80.0), 4)
            .column(Column::remainder())
            .header(22.0, |mut header| {
                for title in ["区域", "名称", "总箱位", "已占用", "空余", "占用率", "状态"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for entry in &entries {
                    let s = entry.stats;
                    body.row(22.0, |mut row| {
                        row.col(|ui| {
                            let selected = self.selected_area.as_deref() == Some(entry.area_id.as_str());
                            if ui.selectable_label(selected, &entry.area_id).clicked() {
                                self.selected_area = Some(entry.area_id.clone());
                            }
                        });
                        row.col(|ui| {
                            ui.label(&entry.area_name);
                        });
                        row.col(|ui| {
                            ui.label(s.total.to_string());
                        });
                        row.col(|ui| {
                            ui.label(s.occupied.to_string());
                        });
                        row.col(|ui| {
                            ui.label(s.available.to_string());
                        });
                        row.col(|ui| {
                            ui.label(format!("{}%", s.occupancy_rate));
                        });
                        row.col(|ui| {
                            let level = s.level();
                            ui.label(RichText::new(level.label()).color(level_color(level)).strong());
                        });
                    });
                }

                let t = totals.stats;
                body.row(24.0, |mut row| {
                    row.col(|ui| {
                        ui.strong("合计");
                    });
                    row.col(|ui| {
                        ui.label(format!("{} 个区域", totals.area_count));
                    });
                    row.col(|ui| {
                        ui.strong(t.total.to_string());
                    });
                    row.col(|ui| {
                        ui.strong(t.occupied.to_string());
                    });
                    row.col(|ui| {
                        ui.strong(t.available.to_string());
                    });
                    row.col(|ui| {
                        ui.strong(format!("{}%", t.occupancy_rate));
                    });
                    row.col(|ui| {
                        let level = t.level();
                        ui.label(RichText::new(level.label()).color(level_color(level)).strong());
                    });
                });
            });

        ui.add_space(16.0);
        ui.separator();
        self.render_breakdown(ui, service);
    }

    fn render_breakdown(&self, ui: &mut Ui, service: &YardPlanningService) {
        let Some(area_id) = self.selected_area.as_deref() else {
            ui.label(RichText::new("点击区域代码查看箱型、客户和分层统计").color(Color32::GRAY));
            return;
        };
        let Ok(breakdown) = service.breakdown(area_id) else {
            return;
        };

        ui.label(RichText::new(format!("{} 明细", area_id)).strong());
        ui.add_space(6.0);

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("箱型").underline());
                egui::Grid::new("type_breakdown").striped(true).show(ui, |ui| {
                    for entry in &breakdown.container_types {
                        ui.label(&entry.label);
                        ui.label(entry.count.to_string());
                        ui.end_row();
                    }
                });
            });
            ui.add_space(24.0);
            ui.vertical(|ui| {
                ui.label(RichText::new("客户").underline());
                egui::Grid::new("customer_breakdown").striped(true).show(ui, |ui| {
                    for entry in &breakdown.customers {
                        ui.label(&entry.label);
                        ui.label(entry.count.to_string());
                        ui.end_row();
                    }
                });
            });
            ui.add_space(24.0);
            ui.vertical(|ui| {
                ui.label(RichText::new("分层").underline());
                egui::Grid::new("layer_breakdown").striped(true).show(ui, |ui| {
                    for layer in &breakdown.layers {
                        ui.label(format!("第{}层", layer.layer));
                        ui.add(
                            egui::ProgressBar::new(layer.occupied as f32 / layer.capacity.max(1) as f32)
                                .desired_width(120.0)
                                .text(format!("{}/{}", layer.occupied, layer.capacity)),
                        );
                        ui.end_row();
                    }
                });
            });
        });
    }
}
