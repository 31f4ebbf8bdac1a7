/// egui rendering of the input panel and the two chart slots.
pub mod panels;
pub mod plot;
