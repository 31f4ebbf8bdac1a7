use std::fmt;

use crate::chart::spec::ChartSpec;
use crate::chart::views::{compute_pie, compute_scatter};
use crate::data::filter::FilterState;
use crate::data::model::LaunchDataset;
use crate::error::ViewError;

// ---------------------------------------------------------------------------
// Named inputs and output slots
// ---------------------------------------------------------------------------

/// Widgets whose value changes trigger recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InputId {
    SiteDropdown,
    PayloadSlider,
}

/// Display areas a chart spec is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputSlot {
    SuccessPieChart,
    PayloadScatterChart,
}

impl fmt::Display for OutputSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputSlot::SuccessPieChart => write!(f, "success-pie-chart"),
            OutputSlot::PayloadScatterChart => write!(f, "success-payload-scatter-chart"),
        }
    }
}

// ---------------------------------------------------------------------------
// Bindings
// ---------------------------------------------------------------------------

/// A pure view handler: reads the dataset and current filters only.
pub type Handler = fn(&LaunchDataset, &FilterState) -> Result<ChartSpec, ViewError>;

/// One handler, the inputs it depends on, and the slot it fills.
#[derive(Clone, Copy)]
pub struct Binding {
    pub inputs: &'static [InputId],
    pub output: OutputSlot,
    pub handler: Handler,
}

impl Binding {
    fn depends_on(&self, input: InputId) -> bool {
        self.inputs.contains(&input)
    }
}

fn pie_handler(dataset: &LaunchDataset, filters: &FilterState) -> Result<ChartSpec, ViewError> {
    compute_pie(dataset, &filters.site)
}

fn scatter_handler(
    dataset: &LaunchDataset,
    filters: &FilterState,
) -> Result<ChartSpec, ViewError> {
    compute_scatter(dataset, &filters.site, filters.payload)
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Routes an input change to every handler bound to it.
///
/// Handlers never see each other's output, so the order they run in
/// does not affect any result.
pub struct Dispatcher {
    bindings: Vec<Binding>,
}

impl Dispatcher {
    pub fn new(bindings: Vec<Binding>) -> Self {
        Self { bindings }
    }

    /// Pie depends on the site; scatter on site and payload range.
    pub fn dashboard() -> Self {
        Self::new(vec![
            Binding {
                inputs: &[InputId::SiteDropdown],
                output: OutputSlot::SuccessPieChart,
                handler: pie_handler,
            },
            Binding {
                inputs: &[InputId::SiteDropdown, InputId::PayloadSlider],
                output: OutputSlot::PayloadScatterChart,
                handler: scatter_handler,
            },
        ])
    }

    /// Slots that would be recomputed when `input` changes.
    pub fn outputs_for(&self, input: InputId) -> Vec<OutputSlot> {
        self.bindings
            .iter()
            .filter(|b| b.depends_on(input))
            .map(|b| b.output)
            .collect()
    }

    /// Run the handlers that depend on `changed`.
    pub fn dispatch(
        &self,
        changed: InputId,
        dataset: &LaunchDataset,
        filters: &FilterState,
    ) -> Vec<(OutputSlot, Result<ChartSpec, ViewError>)> {
        log::debug!(
            "input {changed:?} changed, recomputing {:?} with {filters:?}",
            self.outputs_for(changed)
        );
        self.bindings
            .iter()
            .filter(|b| b.depends_on(changed))
            .map(|b| (b.output, (b.handler)(dataset, filters)))
            .collect()
    }

    /// Run every handler, for the first render.
    pub fn dispatch_all(
        &self,
        dataset: &LaunchDataset,
        filters: &FilterState,
    ) -> Vec<(OutputSlot, Result<ChartSpec, ViewError>)> {
        self.bindings
            .iter()
            .map(|b| (b.output, (b.handler)(dataset, filters)))
            .collect()
    }
}
