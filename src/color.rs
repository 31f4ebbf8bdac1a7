use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Maps category labels (sites, outcomes, booster categories) to colours.
///
/// Built from the full category list of the dataset so a label keeps its
/// colour while filters change what is on screen.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Self {
        let palette = generate_palette(labels.len());
        let mapping = labels
            .iter()
            .zip(palette)
            .map(|(label, c)| (label.as_ref().to_string(), c))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}

/// Fixed colours for the single-site outcome pie.
pub fn outcome_color_map() -> ColorMap {
    let mut map = ColorMap::new::<&str>(&[]);
    map.mapping
        .insert("Success".to_string(), Color32::from_rgb(46, 160, 67));
    map.mapping
        .insert("Failure".to_string(), Color32::from_rgb(214, 69, 65));
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colours_are_distinct() {
        let colours = generate_palette(5);
        assert_eq!(colours.len(), 5);
        for (i, a) in colours.iter().enumerate() {
            for b in &colours[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn unknown_label_falls_back_to_grey() {
        let map = ColorMap::new(&["FT", "B5"]);
        assert_ne!(map.color_for("FT"), map.color_for("B5"));
        assert_eq!(map.color_for("v0.9"), Color32::GRAY);
    }

    #[test]
    fn outcome_colours_are_fixed() {
        let map = outcome_color_map();
        assert_ne!(map.color_for("Success"), map.color_for("Failure"));
        assert_ne!(map.color_for("Success"), Color32::GRAY);
    }
}
