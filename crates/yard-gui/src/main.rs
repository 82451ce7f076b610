//! GUI entry point for Yard Planner

mod app;
mod canvas;
mod overview_panel;
mod settings_panel;
mod yard_panel;

use app::YardPlannerApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    yard_app::logging::init_tracing(false);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "堆场规划",
        options,
        Box::new(|cc| Ok(Box::new(YardPlannerApp::new(cc)))),
    )
}
