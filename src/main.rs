mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::LaunchboardApp;
use eframe::egui;
use state::AppState;

/// Dataset path used when no argument is given.
const DEFAULT_DATASET: &str = "launch_records.csv";

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

    // The dataset is loaded exactly once here; a bad file stops the process.
    let dataset = data::loader::load_csv(&path)
        .with_context(|| format!("loading launch records from {}", path.display()))?;
    log::info!(
        "Loaded {} launch records from {}",
        dataset.len(),
        path.display()
    );

    let mut state = AppState::default();
    state.set_dataset(dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launchboard – Launch Records",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}
