//! Yard view panel: pseudo-3D canvas with area, view, zoom and layer controls

use eframe::egui::{self, Color32, RichText, Sense, Ui, Vec2};
use tracing::warn;
use yard_app::app::YardPlanningService;
use yard_app::config::Config;
use yard_app::export::export_layout_to_excel;
use yard_domain::model::{ViewConfiguration, ViewPreset, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
use yard_domain::service::Surface;

use crate::canvas::{paint_draw_list, to_color32};
use crate::overview_panel::level_color;

const INFO_WIDTH: f32 = 240.0;

pub struct YardPanel {
    view: ViewConfiguration,
    preset: ViewPreset,
    /// Status message (message, is_error)
    status_message: Option<(String, bool)>,
}

impl YardPanel {
    pub fn new(config: &Config) -> Self {
        Self {
            view: ViewConfiguration::new(config.default_area.clone())
                .with_preset(config.default_view)
                .with_zoom(config.initial_zoom()),
            preset: config.default_view,
            status_message: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, service: &mut YardPlanningService) {
        self.render_controls(ui, service);
        ui.add_space(6.0);
        ui.separator();

        let available = ui.available_size();
        let canvas_size = Vec2::new(
            (available.x - INFO_WIDTH - ui.spacing().item_spacing.x).max(100.0),
            available.y.max(100.0),
        );

        ui.horizontal_top(|ui| {
            let (response, painter) = ui.allocate_painter(canvas_size, Sense::hover());
            painter.rect_filled(response.rect, 4.0, Color32::from_gray(250));

            let surface = Surface::new(response.rect.width(), response.rect.height());
            let list = service.render(&self.view, surface);
            if list.is_empty() {
                painter.text(
                    response.rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "请选择堆场区域",
                    egui::FontId::proportional(16.0),
                    Color32::GRAY,
                );
            } else {
                paint_draw_list(&painter, response.rect.min, &list);
            }

            ui.vertical(|ui| {
                ui.set_width(INFO_WIDTH);
                self.render_info_card(ui, service);
                ui.add_space(12.0);
                self.render_legend(ui, service);
            });
        });
    }

    fn render_controls(&mut self, ui: &mut Ui, service: &mut YardPlanningService) {
        ui.horizontal_wrapped(|ui| {
            ui.label("区域:");
            let selected_text = service
                .area(&self.view.selected_area)
                .map(|a| a.name.clone())
                .unwrap_or_else(|_| "未选择".to_string());
            egui::ComboBox::from_id_salt("area_select")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for area in service.areas() {
                        if ui
                            .selectable_label(self.view.selected_area == area.id, &area.name)
                            .clicked()
                        {
                            self.view.selected_area = area.id.clone();
                            self.view.current_layer = None;
                        }
                    }
                });

            ui.add_space(12.0);
            ui.label("视角:");
            for preset in ViewPreset::ALL {
                if ui.selectable_label(self.preset == preset, preset.label()).clicked() {
                    self.preset = preset;
                    self.view.angle = preset.angle();
                }
            }

            ui.add_space(12.0);
            ui.label("缩放:");
            if ui
                .add_enabled(self.view.zoom > ZOOM_MIN, egui::Button::new("－"))
                .clicked()
            {
                self.view.zoom_out();
            }
            let mut zoom = self.view.effective_zoom();
            if ui
                .add(
                    egui::Slider::new(&mut zoom, ZOOM_MIN..=ZOOM_MAX)
                        .step_by(ZOOM_STEP as f64)
                        .suffix("%"),
                )
                .changed()
            {
                self.view.set_zoom(zoom);
            }
            if ui
                .add_enabled(self.view.zoom < ZOOM_MAX, egui::Button::new("＋"))
                .clicked()
            {
                self.view.zoom_in();
            }

            ui.add_space(12.0);
            ui.label("层:");
            let max_layers = service
                .area(&self.view.selected_area)
                .map(|a| a.max_layers)
                .unwrap_or(0);
            let layer_text = match self.view.current_layer {
                Some(layer) => format!("≤ {} 层", layer),
                None => "全部".to_string(),
            };
            egui::ComboBox::from_id_salt("layer_select")
                .selected_text(layer_text)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.view.current_layer, None, "全部");
                    for layer in 1..=max_layers {
                        ui.selectable_value(
                            &mut self.view.current_layer,
                            Some(layer),
                            format!("≤ {} 层", layer),
                        );
                    }
                });

            ui.add_space(12.0);
            if ui.button("🔄 刷新数据").clicked() {
                self.status_message = Some(match service.refresh() {
                    Ok(snapshot) => (format!("已刷新: {} 个箱位", snapshot.len()), false),
                    Err(e) => (format!("刷新失败: {}", e), true),
                });
            }

            if ui.button("📤 导出Excel").clicked() {
                self.export_excel(service);
            }
        });

        if let Some((ref msg, is_error)) = self.status_message {
            let color = if is_error { Color32::LIGHT_RED } else { Color32::DARK_GREEN };
            ui.label(RichText::new(msg).color(color).small());
        }
    }

    fn export_excel(&mut self, service: &YardPlanningService) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Excel", &["xlsx"])
            .set_file_name("yard_layout.xlsx")
            .save_file()
        else {
            return;
        };

        self.status_message = Some(
            match export_layout_to_excel(service.areas(), service.snapshot(), &path) {
                Ok(()) => (format!("已导出: {}", path.display()), false),
                Err(e) => {
                    warn!(error = %e, "Excel export failed");
                    (format!("导出失败: {}", e), true)
                }
            },
        );
    }

    fn render_info_card(&self, ui: &mut Ui, service: &YardPlanningService) {
        ui.label(RichText::new("区域信息").strong());
        ui.add_space(4.0);

        let (Ok(area), Ok(stats)) = (
            service.area(&self.view.selected_area),
            service.area_stats(&self.view.selected_area),
        ) else {
            ui.label(RichText::new("未选择区域").color(Color32::GRAY));
            return;
        };

        egui::Frame::new()
            .fill(Color32::from_gray(245))
            .inner_margin(10.0)
            .corner_radius(4.0)
            .show(ui, |ui| {
                egui::Grid::new("area_info")
                    .num_columns(2)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("区域:");
                        ui.label(&area.name);
                        ui.end_row();

                        ui.label("规格:");
                        ui.label(format!("{}行 × {}列 × {}层", area.rows, area.cols, area.max_layers));
                        ui.end_row();

                        ui.label("总箱位:");
                        ui.label(stats.total.to_string());
                        ui.end_row();

                        ui.label("已占用:");
                        ui.label(stats.occupied.to_string());
                        ui.end_row();

                        ui.label("空余:");
                        ui.label(stats.available.to_string());
                        ui.end_row();

                        ui.label("占用率:");
                        let level = stats.level();
                        ui.label(
                            RichText::new(format!("{}% ({})", stats.occupancy_rate, level.label()))
                                .color(level_color(level)),
                        );
                        ui.end_row();
                    });
            });
    }

    fn render_legend(&self, ui: &mut Ui, service: &YardPlanningService) {
        ui.label(RichText::new("图例").strong());
        ui.add_space(4.0);

        let swatch = |ui: &mut Ui, color: Color32, label: &str| {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(14.0), Sense::hover());
                ui.painter().rect_filled(rect, 2.0, color);
                ui.label(label);
            });
        };

        if let Ok(area) = service.area(&self.view.selected_area) {
            swatch(ui, to_color32(area.rgba(), 0.7), "已占用 (底层)");
            swatch(ui, to_color32(area.rgba(), 1.0), "已占用 (高层)");
        }
        swatch(ui, Color32::from_gray(0xe0), "空箱位");
        ui.label(RichText::new("箱体上的数字为所在层数").color(Color32::GRAY).small());
    }
}
