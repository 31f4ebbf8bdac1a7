use std::collections::BTreeMap;
use std::sync::Arc;

use crate::chart::spec::ChartSpec;
use crate::color::{ColorMap, outcome_color_map};
use crate::config::PayloadControl;
use crate::data::filter::{FilterState, PayloadRange, SiteSelection};
use crate::data::model::LaunchDataset;
use crate::dispatch::{Dispatcher, InputId, OutputSlot};
use crate::error::ViewError;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Launch table, loaded once at startup and never mutated.
    pub dataset: Arc<LaunchDataset>,

    /// Current dropdown / range-control values.
    pub filters: FilterState,

    /// Fixed domain of the payload range control.
    pub payload_control: PayloadControl,

    /// Latest chart spec per display slot.
    charts: BTreeMap<OutputSlot, ChartSpec>,

    dispatcher: Dispatcher,

    /// Colours for the all-sites pie.
    pub site_colors: ColorMap,

    /// Colours for the single-site outcome pie.
    pub outcome_colors: ColorMap,

    /// Colours for booster version categories in the scatter plot.
    pub category_colors: ColorMap,

    /// Text typed into the searchable site dropdown.
    pub site_search: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the initial state and render both charts once.
    pub fn new(dataset: Arc<LaunchDataset>, payload_control: PayloadControl) -> Self {
        let mut state = Self {
            filters: FilterState::initial(&dataset),
            payload_control,
            charts: BTreeMap::new(),
            dispatcher: Dispatcher::dashboard(),
            site_colors: ColorMap::new(dataset.sites()),
            outcome_colors: outcome_color_map(),
            category_colors: ColorMap::new(dataset.booster_categories()),
            site_search: String::new(),
            status_message: None,
            dataset,
        };
        let results = state.dispatcher.dispatch_all(&state.dataset, &state.filters);
        state.apply(results);
        state
    }

    pub fn chart(&self, slot: OutputSlot) -> Option<&ChartSpec> {
        self.charts.get(&slot)
    }

    /// Handle a dropdown change. Values the dataset does not know are rejected
    /// without touching the current charts.
    pub fn select_site(&mut self, value: &str) {
        match SiteSelection::resolve(value, &self.dataset) {
            Ok(site) => {
                if site != self.filters.site {
                    log::info!("site selected: {site}");
                    self.filters.site = site;
                    self.input_changed(InputId::SiteDropdown);
                }
            }
            Err(e) => self.reject(e),
        }
    }

    /// Move the low handle; the high handle follows if it would be passed.
    pub fn set_payload_low(&mut self, low: f64) {
        let high = self.filters.payload.high().max(low);
        self.set_payload_range(low, high);
    }

    /// Move the high handle; the low handle follows if it would be passed.
    pub fn set_payload_high(&mut self, high: f64) {
        let low = self.filters.payload.low().min(high);
        self.set_payload_range(low, high);
    }

    pub fn set_payload_range(&mut self, low: f64, high: f64) {
        match PayloadRange::new(low, high) {
            Ok(range) => {
                if range != self.filters.payload {
                    self.filters.payload = range;
                    self.input_changed(InputId::PayloadSlider);
                }
            }
            Err(e) => self.reject(e),
        }
    }

    fn input_changed(&mut self, input: InputId) {
        let results = self.dispatcher.dispatch(input, &self.dataset, &self.filters);
        self.status_message = None;
        self.apply(results);
    }

    /// Store successful specs; a failed handler keeps the slot's previous chart.
    fn apply(&mut self, results: Vec<(OutputSlot, Result<ChartSpec, ViewError>)>) {
        for (slot, result) in results {
            match result {
                Ok(spec) => {
                    self.charts.insert(slot, spec);
                }
                Err(e) => {
                    log::warn!("{slot} not updated: {e}");
                    self.status_message = Some(format!("Error: {e}"));
                }
            }
        }
    }

    fn reject(&mut self, e: ViewError) {
        log::warn!("rejected input: {e}");
        self.status_message = Some(format!("Error: {e}"));
    }
}
