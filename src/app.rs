use eframe::egui::{self, Ui};

use crate::dispatch::OutputSlot;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
    title: String,
}

impl LaunchDashApp {
    pub fn new(state: AppState, title: String) -> Self {
        Self { state, title }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title, menu, status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, &self.title);
        });

        // ---- Left side panel: site dropdown and payload range ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: pie above scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let width = ui.available_width();
            let pie_height = ui.available_height() * 0.45;
            ui.allocate_ui(egui::vec2(width, pie_height), |ui: &mut Ui| {
                plot::chart_slot(ui, &self.state, OutputSlot::SuccessPieChart);
            });
            ui.separator();
            plot::chart_slot(ui, &self.state, OutputSlot::PayloadScatterChart);
        });
    }
}
