use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, pie, scatter};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchboardApp {
    pub state: AppState,
}

impl LaunchboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: selectors ----
        egui::SidePanel::left("filter_panel")
            .default_width(230.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: payload scatter ----
        egui::TopBottomPanel::bottom("scatter_panel")
            .resizable(true)
            .default_height(300.0)
            .show(ctx, |ui| {
                scatter::payload_scatter(ui, &self.state);
            });

        // ---- Central panel: success pie ----
        egui::CentralPanel::default().show(ctx, |ui| {
            pie::success_pie(ui, &self.state);
        });
    }
}
