use eframe::egui::{RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Polygon};

use crate::color::categorical_palette;
use crate::data::model::SiteSelection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Success pie chart (central panel)
// ---------------------------------------------------------------------------

/// Render the success pie from the cached aggregate.
///
/// All sites: one slice per site, counting successful launches.
/// Single site: one slice per outcome at that site.
pub fn success_pie(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a launch records CSV to begin  (File → Open…)");
        });
        return;
    }

    let title = match &state.site_selection {
        SiteSelection::All => "Total successful launches by site".to_string(),
        SiteSelection::Site(name) => format!("Success vs failure for {name}"),
    };
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(title).heading());
    });

    let total: usize = state.pie_counts.values().sum();
    if total == 0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches match the current selection.");
        });
        return;
    }

    let palette = categorical_palette(state.pie_counts.len());

    Plot::new("success_pie")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.4)
        .include_x(1.4)
        .include_y(-1.4)
        .include_y(1.4)
        .show(ui, |plot_ui| {
            let mut start = 0.0;
            for ((label, &count), color) in state.pie_counts.iter().zip(&palette) {
                let frac = count as f64 / total as f64;
                let share = 100.0 * frac;

                let sector = Polygon::new(sector_points(start, start + frac))
                    .name(format!("{label}: {count} ({share:.1}%)"))
                    .fill_color(color.gamma_multiply(0.9))
                    .stroke(Stroke::new(1.0, *color));
                plot_ui.polygon(sector);

                start += frac;
            }
        });
}

/// Wedge outline for the turn-fraction band `[start, end]` of the unit
/// circle, drawn clockwise from 12 o'clock.
fn sector_points(start: f64, end: f64) -> PlotPoints<'static> {
    use std::f64::consts::TAU;

    let span = end - start;
    let steps = ((span * 96.0).ceil() as usize).max(2);

    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let turn = start + span * (i as f64 / steps as f64);
        let angle = TAU * (0.25 - turn);
        points.push([angle.cos(), angle.sin()]);
    }
    PlotPoints::from(points)
}
