use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::{SiteSelection, site_options};
use crate::dispatch::OutputSlot;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – site dropdown and payload range
// ---------------------------------------------------------------------------

/// Render the left input panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Launch Site");
            site_dropdown(ui, state);
            ui.add_space(12.0);

            ui.strong("Payload range (Kg):");
            payload_range(ui, state);
            ui.add_space(12.0);
            ui.separator();

            let ds = &state.dataset;
            ui.label(format!("{} launches, {} successful", ds.len(), ds.success_count()));
            ui.label(format!(
                "Observed payload: {} – {} kg",
                ds.min_payload(),
                ds.max_payload()
            ));
        });
}

/// Searchable dropdown of "All Sites" plus every site in the data.
fn site_dropdown(ui: &mut Ui, state: &mut AppState) {
    let current = state.filters.site.to_string();
    let options = site_options(&state.dataset);

    let picked = egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(&current)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.site_search)
                    .hint_text("Select a Launch Site here"),
            );
            let query = state.site_search.to_lowercase();

            let mut picked = None;
            for option in &options {
                if !query.is_empty() && !option.to_lowercase().contains(&query) {
                    continue;
                }
                if ui.selectable_label(current == *option, option).clicked() {
                    picked = Some(option.clone());
                }
            }
            picked
        })
        .inner
        .flatten();

    if let Some(value) = picked {
        state.site_search.clear();
        state.select_site(&value);
    }
}

/// Two handles on the fixed control domain. Values are copied out so the
/// slider never writes a clamped value back without user interaction.
fn payload_range(ui: &mut Ui, state: &mut AppState) {
    let control = state.payload_control;
    let mut low = state.filters.payload.low();
    let mut high = state.filters.payload.high();

    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, control.min..=control.max)
                .step_by(control.step)
                .suffix(" kg")
                .text("from"),
        )
        .changed();
    if low_changed {
        state.set_payload_low(low);
    }

    let high_changed = ui
        .add(
            egui::Slider::new(&mut high, control.min..=control.max)
                .step_by(control.step)
                .suffix(" kg")
                .text("to"),
        )
        .changed();
    if high_changed {
        state.set_payload_high(high);
    }

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for mark in control.marks() {
            ui.label(RichText::new(format!("{mark} kg")).small().weak());
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title, menu and status line.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, title: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new(title)
                .size(28.0)
                .strong()
                .color(Color32::from_rgb(0x50, 0x3D, 0x36)),
        );
    });

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Export", |ui: &mut Ui| {
            for (label, slot) in [
                ("Copy pie chart JSON", OutputSlot::SuccessPieChart),
                ("Copy scatter chart JSON", OutputSlot::PayloadScatterChart),
            ] {
                if ui.button(label).clicked() {
                    copy_chart_json(ui, state, slot);
                    ui.close_menu();
                }
            }
        });

        ui.separator();

        let site = match &state.filters.site {
            SiteSelection::AllSites => "all sites".to_string(),
            SiteSelection::Site(name) => name.clone(),
        };
        ui.label(format!(
            "Showing {site}, payload {} – {} kg",
            state.filters.payload.low(),
            state.filters.payload.high()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

fn copy_chart_json(ui: &Ui, state: &mut AppState, slot: OutputSlot) {
    let Some(chart) = state.chart(slot) else {
        return;
    };
    match chart.to_json() {
        Ok(json) => {
            log::info!("copied {slot} spec '{}' to clipboard", chart.title());
            ui.ctx().copy_text(json);
        }
        Err(e) => {
            log::error!("Failed to serialise {slot}: {e}");
            state.status_message = Some(format!("Error: {e}"));
        }
    }
}
