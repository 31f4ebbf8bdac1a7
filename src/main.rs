mod app;
mod chart;
mod color;
mod config;
mod data;
mod dispatch;
mod error;
mod state;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use app::LaunchDashApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // The table is loaded once; a missing or malformed file stops here.
    let dataset = match data::loader::load_file(&config.data_path) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load launch records: {e:#}");
            return Err(e);
        }
    };
    log::info!(
        "Loaded {} launches from {} sites, payload {}–{} kg",
        dataset.len(),
        dataset.sites().len(),
        dataset.min_payload(),
        dataset.max_payload()
    );

    let state = AppState::new(Arc::new(dataset), config.payload_control);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(state, title)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
