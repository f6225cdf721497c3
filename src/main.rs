//! SpaceX Launch Records Dashboard
//!
//! Loads a static CSV of SpaceX launch records at startup and shows an
//! interactive dashboard: a launch site selector, a success pie chart, a
//! payload range filter, and a payload-vs-outcome scatter chart.

mod charts;
mod data;
mod gui;

use anyhow::Context;
use eframe::egui;

use data::LaunchDataLoader;
use gui::DashboardApp;

/// Launch records file read from the working directory at startup.
const DATA_FILE: &str = "spacex_launch_dash.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // A missing or malformed records file is fatal before the UI starts
    let dataset = LaunchDataLoader::load_csv(DATA_FILE)
        .with_context(|| format!("failed to load launch records from {DATA_FILE}"))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("SpaceX Launch Records Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(move |cc| {
            Ok(Box::new(DashboardApp::new(cc, dataset, DATA_FILE.into())))
        }),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}
