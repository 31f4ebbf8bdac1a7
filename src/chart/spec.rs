use serde::Serialize;

/// Donut hole as a fraction of the pie radius.
pub const PIE_HOLE: f32 = 0.3;

/// Marker size given to the largest payload in a scatter subset.
pub const MAX_MARKER_SIZE: f32 = 20.0;

// ---------------------------------------------------------------------------
// ChartSpec – renderer-independent chart description
// ---------------------------------------------------------------------------

/// What a view function hands to the UI: enough to draw the chart,
/// nothing tied to a particular renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie(pie) => &pie.title,
            ChartSpec::Scatter(scatter) => &scatter.title,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ---------------------------------------------------------------------------
// Pie
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    /// Inner radius / outer radius.
    pub hole: f32,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
}

impl PieChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    /// Cumulative `(start, end)` fractions of the full turn, one per slice.
    pub fn spans(&self) -> Vec<(f64, f64)> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }
        let mut start = 0.0;
        self.slices
            .iter()
            .map(|s| {
                let end = start + s.count as f64 / total as f64;
                let span = (start, end);
                start = end;
                span
            })
            .collect()
    }

    /// Index of the slice covering `fraction` of the full turn (0..1).
    pub fn slice_at(&self, fraction: f64) -> Option<usize> {
        self.spans()
            .iter()
            .position(|&(start, end)| fraction >= start && fraction < end)
    }
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Column the colour encoding follows.
    pub color_by: String,
    /// Distinct colour categories present in `points`, in dataset order.
    pub categories: Vec<String>,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    /// Outcome class, 0 or 1.
    pub class: u8,
    pub category: String,
    /// Area-proportional marker size, `0..=MAX_MARKER_SIZE`.
    pub size: f32,
    pub hover: String,
}

impl ScatterChart {
    /// Points belonging to one colour category.
    pub fn points_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a ScatterPoint> {
        self.points.iter().filter(move |p| p.category == category)
    }
}

/// Marker size for `value` when `max` is the largest value plotted.
/// Marker area, not diameter, grows linearly with the value.
pub fn marker_size(value: f64, max: f64) -> f32 {
    if max <= 0.0 {
        return 0.0;
    }
    MAX_MARKER_SIZE * (value / max).clamp(0.0, 1.0).sqrt() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pie(counts: &[(&str, usize)]) -> PieChart {
        PieChart {
            title: "t".into(),
            hole: PIE_HOLE,
            slices: counts
                .iter()
                .map(|&(label, count)| PieSlice {
                    label: label.into(),
                    count,
                })
                .collect(),
        }
    }

    #[test]
    fn spans_partition_the_turn() {
        let chart = pie(&[("a", 1), ("b", 3)]);
        assert_eq!(chart.spans(), vec![(0.0, 0.25), (0.25, 1.0)]);
        assert_eq!(chart.slice_at(0.1), Some(0));
        assert_eq!(chart.slice_at(0.25), Some(1));
        assert_eq!(chart.slice_at(1.0), None);
    }

    #[test]
    fn empty_pie_has_no_spans() {
        let chart = pie(&[]);
        assert_eq!(chart.total(), 0);
        assert!(chart.spans().is_empty());
        assert_eq!(chart.slice_at(0.5), None);
    }

    #[test]
    fn marker_area_scales_with_value() {
        assert_eq!(marker_size(400.0, 400.0), MAX_MARKER_SIZE);
        assert_eq!(marker_size(100.0, 400.0), MAX_MARKER_SIZE / 2.0);
        assert_eq!(marker_size(0.0, 400.0), 0.0);
        assert_eq!(marker_size(0.0, 0.0), 0.0);
    }

    #[test]
    fn json_export_is_tagged_by_kind() {
        let spec = ChartSpec::Pie(pie(&[("Success", 2)]));
        let value: serde_json::Value = serde_json::from_str(&spec.to_json().unwrap()).unwrap();
        assert_eq!(value["kind"], "pie");
        assert_eq!(value["slices"][0]["label"], "Success");
        assert_eq!(value["slices"][0]["count"], 2);
    }
}
