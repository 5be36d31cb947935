use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader;
use crate::data::model::SiteSelection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selector widgets
// ---------------------------------------------------------------------------

/// Render the left controls panel: site selector and payload sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // Clone what we need so we can mutate state inside the widget closures.
    let (sites, n_records) = match &state.dataset {
        Some(ds) => (ds.sites.clone(), ds.len()),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // ---- Site selector ----
    ui.strong("Launch site");
    let selected_label = state.site_selection.label().to_string();
    egui::ComboBox::from_id_salt("site_select")
        .selected_text(&selected_label)
        .show_ui(ui, |ui: &mut Ui| {
            let all_selected = state.site_selection == SiteSelection::All;
            if ui.selectable_label(all_selected, "All Sites").clicked() {
                state.set_site_selection(SiteSelection::All);
            }
            for site in &sites {
                let is_selected =
                    matches!(&state.site_selection, SiteSelection::Site(s) if s == site);
                if ui.selectable_label(is_selected, site).clicked() {
                    state.set_site_selection(SiteSelection::Site(site.clone()));
                }
            }
        });

    ui.separator();

    // ---- Payload range sliders (1000 kg steps) ----
    ui.strong("Payload range (kg)");
    let (min, max) = state.payload_bounds;
    let mut low = state.payload_range.low;
    let mut high = state.payload_range.high;

    if ui
        .add(egui::Slider::new(&mut low, min..=max).step_by(1000.0).text("min"))
        .changed()
    {
        state.set_payload_low(low);
    }
    if ui
        .add(egui::Slider::new(&mut high, min..=max).step_by(1000.0).text("max"))
        .changed()
    {
        state.set_payload_high(high);
    }
    ui.label(format!(
        "{:.0} to {:.0} kg",
        state.payload_range.low, state.payload_range.high
    ));

    ui.separator();
    ui.label(format!(
        "{} of {} launches in view",
        state.visible_indices.len(),
        n_records
    ));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(RichText::new("Launch Records Dashboard").strong());

        if let Some(ds) = &state.dataset {
            ui.separator();
            ui.label(format!(
                "{} launches loaded, {} in view",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user swap in a different launch-records CSV at runtime.
/// A failed load keeps the current dataset and reports in the status line.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_csv(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launch records from {}",
                    dataset.len(),
                    path.display()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load launch records: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
