use std::collections::BTreeMap;

use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Payload vs outcome scatter (bottom panel)
// ---------------------------------------------------------------------------

/// Render the payload scatter from the cached filtered indices.
/// One named series per booster version category, so the legend doubles as
/// a category key.
pub fn payload_scatter(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    if state.visible_indices.is_empty() {
        ui.label("No launches in the selected payload range.");
    }

    let mut series: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for &idx in &state.visible_indices {
        let rec = &dataset.records[idx];
        series
            .entry(rec.booster_category.as_str())
            .or_default()
            .push([rec.payload_mass_kg, rec.outcome.as_y()]);
    }

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload mass (kg)")
        .y_axis_label("Landing outcome")
        .include_y(-0.25)
        .include_y(1.25)
        .show(ui, |plot_ui| {
            for (category, points) in series {
                let color = state
                    .category_colors
                    .as_ref()
                    .map(|c| c.color_for(category))
                    .unwrap_or(Color32::LIGHT_BLUE);

                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(category)
                        .color(color)
                        .filled(true)
                        .radius(4.0)
                        .shape(MarkerShape::Circle),
                );
            }
        });
}
