use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Categorical palette generator
// ---------------------------------------------------------------------------

/// Generate `n` visually distinct colours from evenly spaced hues.
/// Starts in the blue range so the first series is not alarm-red.
pub fn categorical_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (210.0 + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.70, 0.55);
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
// Category → colour mapping for the scatter series
// ---------------------------------------------------------------------------

/// Assigns each booster version category a fixed colour. Rebuilt whenever a
/// dataset is loaded so colours stay stable for its lifetime.
#[derive(Debug, Clone)]
pub struct CategoryColors {
    mapping: BTreeMap<String, Color32>,
    fallback: Color32,
}

impl CategoryColors {
    pub fn new(categories: &BTreeSet<String>) -> Self {
        let palette = categorical_palette(categories.len());
        let mapping = categories
            .iter()
            .cloned()
            .zip(palette)
            .collect::<BTreeMap<String, Color32>>();

        CategoryColors {
            mapping,
            fallback: Color32::GRAY,
        }
    }

    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping.get(category).copied().unwrap_or(self.fallback)
    }
}
