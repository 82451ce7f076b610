//! Settings panel for yard-planner GUI

use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, Ui};
use yard_app::config::Config;
use yard_domain::model::{ViewPreset, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

/// What the app should do after the panel was drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    None,
    /// Config was saved; rebuild the yard from it
    Apply,
}

pub struct SettingsPanel {
    min_rate: f64,
    max_rate: f64,
    use_seed: bool,
    seed_input: String,
    default_zoom: u32,
    default_view: ViewPreset,
    areas_file: String,
    /// Whether config was modified
    modified: bool,
    /// Status message (message, is_error)
    status_message: Option<(String, bool)>,
}

impl SettingsPanel {
    pub fn new(config: &Config) -> Self {
        let mut panel = Self {
            min_rate: 0.0,
            max_rate: 0.0,
            use_seed: false,
            seed_input: String::new(),
            default_zoom: 0,
            default_view: ViewPreset::default(),
            areas_file: String::new(),
            modified: false,
            status_message: None,
        };
        panel.load_from(config);
        panel
    }

    fn load_from(&mut self, config: &Config) {
        self.min_rate = config.min_occupancy_rate;
        self.max_rate = config.max_occupancy_rate;
        self.use_seed = config.seed.is_some();
        self.seed_input = config.seed.map(|s| s.to_string()).unwrap_or_default();
        self.default_zoom = config.initial_zoom();
        self.default_view = config.default_view;
        self.areas_file = config
            .areas_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        self.modified = false;
    }

    pub fn ui(&mut self, ui: &mut Ui, config: &mut Config) -> SettingsAction {
        let mut action = SettingsAction::None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("设置");
            ui.add_space(10.0);

            // Occupancy range
            ui.label(RichText::new("随机占用率范围").strong());
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.label("最低:");
                if ui
                    .add(egui::Slider::new(&mut self.min_rate, 0.0..=1.0).fixed_decimals(2))
                    .changed()
                {
                    self.modified = true;
                }
            });
            ui.horizontal(|ui| {
                ui.label("最高:");
                if ui
                    .add(egui::Slider::new(&mut self.max_rate, 0.0..=1.0).fixed_decimals(2))
                    .changed()
                {
                    self.modified = true;
                }
            });
            if self.min_rate > self.max_rate {
                ui.label(RichText::new("最低占用率不能高于最高占用率").color(Color32::LIGHT_RED));
            }

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(15.0);

            // Seed
            ui.label(RichText::new("随机种子").strong());
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                if ui.checkbox(&mut self.use_seed, "固定种子").changed() {
                    self.modified = true;
                }
                let response = ui.add_enabled(
                    self.use_seed,
                    egui::TextEdit::singleline(&mut self.seed_input).desired_width(160.0),
                );
                if response.changed() {
                    self.modified = true;
                }
            });
            ui.label(
                RichText::new("※ 固定种子时每次刷新得到相同的堆场数据序列")
                    .color(Color32::GRAY)
                    .small(),
            );

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(15.0);

            // View defaults
            ui.label(RichText::new("默认视图").strong());
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                for preset in ViewPreset::ALL {
                    if ui
                        .selectable_label(self.default_view == preset, preset.label())
                        .clicked()
                    {
                        self.default_view = preset;
                        self.modified = true;
                    }
                }
            });
            ui.horizontal(|ui| {
                ui.label("默认缩放:");
                if ui
                    .add(
                        egui::Slider::new(&mut self.default_zoom, ZOOM_MIN..=ZOOM_MAX)
                            .step_by(ZOOM_STEP as f64)
                            .suffix("%"),
                    )
                    .changed()
                {
                    self.modified = true;
                }
            });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(15.0);

            // Areas file
            ui.label(RichText::new("区域配置文件 (TOML)").strong());
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                if ui.text_edit_singleline(&mut self.areas_file).changed() {
                    self.modified = true;
                }
                if ui.button("选择...").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("TOML", &["toml"])
                        .pick_file()
                    {
                        self.areas_file = path.display().to_string();
                        self.modified = true;
                    }
                }
                if ui.button("内置区域").clicked() {
                    self.areas_file.clear();
                    self.modified = true;
                }
            });

            ui.add_space(20.0);

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(
                        self.modified,
                        egui::Button::new(RichText::new("💾 保存并应用").size(16.0)),
                    )
                    .clicked()
                    && self.save_config(config)
                {
                    action = SettingsAction::Apply;
                }

                if ui.button("撤销").clicked() {
                    self.load_from(config);
                    self.status_message = None;
                }

                if ui.button("恢复默认").clicked() {
                    let mut defaults = config.clone();
                    defaults.reset();
                    self.load_from(&defaults);
                    self.modified = true;
                }

                if self.modified {
                    ui.label(RichText::new("* 有未保存的修改").color(Color32::YELLOW));
                }
            });

            if let Some((ref msg, is_error)) = self.status_message {
                ui.add_space(10.0);
                let color = if is_error { Color32::LIGHT_RED } else { Color32::LIGHT_GREEN };
                ui.label(RichText::new(msg).color(color));
            }
        });

        action
    }

    /// Validate the form into `config` and write it; true when saved
    fn save_config(&mut self, config: &mut Config) -> bool {
        let seed = if self.use_seed {
            match self.seed_input.trim().parse::<u64>() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    self.status_message = Some(("种子必须是非负整数".to_string(), true));
                    return false;
                }
            }
        } else {
            None
        };

        let mut updated = config.clone();
        updated.min_occupancy_rate = self.min_rate;
        updated.max_occupancy_rate = self.max_rate;
        updated.seed = seed;
        updated.default_zoom = self.default_zoom;
        updated.default_view = self.default_view;
        updated.areas_file = Some(self.areas_file.trim())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        if let Err(e) = updated.generation_policy() {
            self.status_message = Some((format!("设置无效: {}", e), true));
            return false;
        }

        match updated.save() {
            Ok(()) => {
                *config = updated;
                self.modified = false;
                self.status_message = Some(("设置已保存".to_string(), false));
                true
            }
            Err(e) => {
                self.status_message = Some((format!("保存失败: {}", e), true));
                false
            }
        }
    }
}
