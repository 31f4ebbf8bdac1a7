use std::f64::consts::TAU;

use eframe::egui::{Align2, Color32, FontId, Mesh, Pos2, Sense, Shape, Ui, Vec2};
use egui_plot::{Legend, MarkerShape, Plot, Points};

use crate::chart::spec::{ChartSpec, PieChart, ScatterChart};
use crate::color::ColorMap;
use crate::data::filter::SiteSelection;
use crate::dispatch::OutputSlot;
use crate::state::AppState;

/// Smallest marker radius drawn, so zero-payload launches stay visible.
const MIN_MARKER_RADIUS: f32 = 2.0;

// ---------------------------------------------------------------------------
// Output slot
// ---------------------------------------------------------------------------

/// Paint whatever chart currently occupies `slot`.
pub fn chart_slot(ui: &mut Ui, state: &AppState, slot: OutputSlot) {
    match state.chart(slot) {
        Some(ChartSpec::Pie(pie)) => {
            let colors = match state.filters.site {
                SiteSelection::AllSites => &state.site_colors,
                SiteSelection::Site(_) => &state.outcome_colors,
            };
            pie_chart(ui, pie, colors);
        }
        Some(ChartSpec::Scatter(scatter)) => {
            scatter_chart(ui, scatter, &state.category_colors);
        }
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label("No chart available.");
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Donut chart
// ---------------------------------------------------------------------------

/// Render a pie spec as a donut with percentage labels and a legend.
pub fn pie_chart(ui: &mut Ui, chart: &PieChart, colors: &ColorMap) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&chart.title);
    });

    if chart.total() == 0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches match the current selection.");
        });
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        let side = ui
            .available_height()
            .min(ui.available_width() * 0.7)
            .max(120.0);
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
        let center = response.rect.center();
        let outer = side * 0.45;
        let inner = outer * chart.hole;
        let total = chart.total();

        for (&(start, end), slice) in chart.spans().iter().zip(&chart.slices) {
            let color = colors.color_for(&slice.label);
            painter.add(Shape::mesh(ring_segment(center, inner, outer, start, end, color)));

            let label_pos = polar(center, (inner + outer) / 2.0, (start + end) / 2.0);
            painter.text(
                label_pos,
                Align2::CENTER_CENTER,
                format!("{:.1}%", (end - start) * 100.0),
                FontId::proportional(13.0),
                Color32::WHITE,
            );
        }

        let hovered = response.hover_pos().and_then(|pos| {
            let offset = pos - center;
            let r = offset.length();
            if r < inner || r > outer {
                return None;
            }
            chart.slice_at(fraction_at(offset))
        });
        if let Some(idx) = hovered {
            let slice = &chart.slices[idx];
            response.on_hover_ui_at_pointer(|ui: &mut Ui| {
                ui.strong(&slice.label);
                ui.label(format!(
                    "{} launches ({:.1}%)",
                    slice.count,
                    slice.count as f64 / total as f64 * 100.0
                ));
            });
        }

        ui.vertical(|ui: &mut Ui| {
            for slice in &chart.slices {
                ui.horizontal(|ui: &mut Ui| {
                    let (rect, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
                    ui.painter()
                        .rect_filled(rect, 2.0, colors.color_for(&slice.label));
                    ui.label(format!("{}  ({})", slice.label, slice.count));
                });
            }
        });
    });
}

/// Point at `radius` and `fraction` of a clockwise turn starting at 12 o'clock.
fn polar(center: Pos2, radius: f32, fraction: f64) -> Pos2 {
    let theta = (fraction * TAU) as f32;
    Pos2::new(
        center.x + radius * theta.sin(),
        center.y - radius * theta.cos(),
    )
}

/// Inverse of [`polar`]: fraction of the turn for a screen-space offset.
fn fraction_at(offset: Vec2) -> f64 {
    let theta = (offset.x as f64).atan2(-(offset.y as f64));
    theta.rem_euclid(TAU) / TAU
}

/// Triangle strip covering one slice of the ring between `inner` and `outer`.
fn ring_segment(
    center: Pos2,
    inner: f32,
    outer: f32,
    start: f64,
    end: f64,
    color: Color32,
) -> Mesh {
    let steps = (((end - start) * 128.0).ceil() as u32).max(2);
    let mut mesh = Mesh::default();
    for i in 0..=steps {
        let f = start + (end - start) * i as f64 / steps as f64;
        mesh.colored_vertex(polar(center, outer, f), color);
        mesh.colored_vertex(polar(center, inner, f), color);
    }
    for i in 0..steps {
        let base = i * 2;
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base + 1, base + 3, base + 2);
    }
    mesh
}

// ---------------------------------------------------------------------------
// Scatter plot
// ---------------------------------------------------------------------------

/// Render a scatter spec: x = payload, y = class, one legend entry per
/// booster category, marker size from the spec.
pub fn scatter_chart(ui: &mut Ui, chart: &ScatterChart, colors: &ColorMap) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&chart.title);
    });

    if chart.points.is_empty() {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.weak("No launches in the selected payload range.");
        });
    }

    let hovers: Vec<([f64; 2], String)> = chart
        .points
        .iter()
        .map(|p| ([p.payload_mass_kg, p.class as f64], p.hover.clone()))
        .collect();

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label(&chart.x_label)
        .y_axis_label(&chart.y_label)
        .include_x(0.0)
        .include_y(-0.25)
        .include_y(1.25)
        .y_axis_formatter(|mark, _range| {
            if mark.value == 0.0 || mark.value == 1.0 {
                format!("{}", mark.value)
            } else {
                String::new()
            }
        })
        .label_formatter(move |name, value| {
            let known = hovers
                .iter()
                .find(|(xy, _)| xy[0] == value.x && xy[1] == value.y)
                .map(|(_, text)| text.clone());
            match known {
                Some(text) if name.is_empty() => text,
                Some(text) => format!("{name}\n{text}"),
                None => format!("Payload Mass (kg): {:.0}", value.x),
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for category in &chart.categories {
                let color = colors.color_for(category);
                for p in chart.points_in(category) {
                    plot_ui.points(
                        Points::new(vec![[p.payload_mass_kg, p.class as f64]])
                            .name(category)
                            .shape(MarkerShape::Circle)
                            .color(color)
                            .radius((p.size / 2.0).max(MIN_MARKER_RADIUS))
                            .filled(true),
                    );
                }
            }
        });
}
