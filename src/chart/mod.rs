/// Chart layer: renderer-independent chart specs and the two view
/// functions that derive them from the launch table.
pub mod spec;
pub mod views;
