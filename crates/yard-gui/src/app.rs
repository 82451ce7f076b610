//! Main application structure with tab navigation

use eframe::egui::{self, Color32, RichText};
use tracing::warn;
use yard_app::app::YardPlanningService;
use yard_app::config::Config;
use yard_app::constants::default_areas;
use yard_domain::service::GenerationPolicy;

use crate::overview_panel::OverviewPanel;
use crate::settings_panel::{SettingsAction, SettingsPanel};
use crate::yard_panel::YardPanel;

/// Application tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Yard,
    Overview,
    Settings,
}

impl Tab {
    /// Get the Chinese label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Yard => "堆场视图",
            Tab::Overview => "区域概览",
            Tab::Settings => "设置",
        }
    }
}

/// Main application state
pub struct YardPlannerApp {
    current_tab: Tab,
    yard_panel: YardPanel,
    overview_panel: OverviewPanel,
    settings_panel: SettingsPanel,
    config: Config,
    /// None only when even the built-in areas could not be loaded
    service: Option<YardPlanningService>,
    /// Error shown above the panels (e.g. a broken areas file)
    load_error: Option<String>,
}

impl YardPlannerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Setup CJK fonts
        let mut fonts = egui::FontDefinitions::default();
        if let Some(font_data) = Self::load_system_font() {
            fonts.font_data.insert(
                "cjk".to_owned(),
                egui::FontData::from_owned(font_data).into(),
            );
            fonts
                .families
                .entry(egui::FontFamily::Proportional)
                .or_default()
                .insert(0, "cjk".to_owned());
            fonts
                .families
                .entry(egui::FontFamily::Monospace)
                .or_default()
                .insert(0, "cjk".to_owned());
        }
        cc.egui_ctx.set_fonts(fonts);
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let config = Config::load().unwrap_or_default();
        let (service, load_error) = Self::build_service(&config);

        Self {
            current_tab: Tab::default(),
            yard_panel: YardPanel::new(&config),
            overview_panel: OverviewPanel::new(),
            settings_panel: SettingsPanel::new(&config),
            config,
            service,
            load_error,
        }
    }

    /// Build the planning service, falling back to the built-in areas
    fn build_service(config: &Config) -> (Option<YardPlanningService>, Option<String>) {
        match YardPlanningService::from_config(config) {
            Ok(service) => (Some(service), None),
            Err(e) => {
                warn!(error = %e, "Falling back to built-in yard areas");
                let fallback =
                    YardPlanningService::new(default_areas(), GenerationPolicy::default(), config.seed).ok();
                (fallback, Some(format!("加载配置失败，已使用内置区域: {}", e)))
            }
        }
    }

    /// Load a system font with CJK glyphs
    fn load_system_font() -> Option<Vec<u8>> {
        let font_paths = [
            "C:/Windows/Fonts/msyh.ttc",
            "C:/Windows/Fonts/simhei.ttf",
            "/System/Library/Fonts/PingFang.ttc",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
        ];

        font_paths.iter().find_map(|path| std::fs::read(path).ok())
    }

    fn render_tab_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;

            for tab in [Tab::Yard, Tab::Overview, Tab::Settings] {
                let selected = self.current_tab == tab;
                if ui.selectable_label(selected, tab.label()).clicked() {
                    self.current_tab = tab;
                }
                ui.add_space(8.0);
            }
        });
    }
}

impl eframe::App for YardPlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_tab_bar(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(ref err) = self.load_error {
                ui.label(RichText::new(err).color(Color32::RED));
                ui.add_space(6.0);
            }

            match self.current_tab {
                Tab::Yard => match self.service.as_mut() {
                    Some(service) => self.yard_panel.ui(ui, service),
                    None => {
                        ui.label("没有可用的堆场区域");
                    }
                },
                Tab::Overview => match self.service.as_ref() {
                    Some(service) => self.overview_panel.ui(ui, service),
                    None => {
                        ui.label("没有可用的堆场区域");
                    }
                },
                Tab::Settings => {
                    if self.settings_panel.ui(ui, &mut self.config) == SettingsAction::Apply {
                        let (service, load_error) = Self::build_service(&self.config);
                        self.service = service;
                        self.load_error = load_error;
                        self.yard_panel = YardPanel::new(&self.config);
                    }
                }
            }
        });
    }
}
