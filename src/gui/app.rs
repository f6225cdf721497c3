//! Dashboard Main Application
//! Main window with the control panel and chart viewer. The dataset is
//! loaded at startup; Browse reloads a different launch records CSV on a
//! background thread.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

use egui::SidePanel;

use crate::data::{LaunchDataLoader, LaunchDataset};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};

/// CSV loading result from background thread
enum LoadResult {
    Complete {
        dataset: LaunchDataset,
        path: PathBuf,
    },
    Error(String),
}

/// Main application window.
pub struct DashboardApp {
    dataset: LaunchDataset,
    control_panel: ControlPanel,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl DashboardApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        dataset: LaunchDataset,
        csv_path: PathBuf,
    ) -> Self {
        let mut control_panel = ControlPanel::new();
        control_panel.settings.csv_path = Some(csv_path);
        control_panel.update_sites(dataset.sites.clone());
        let (low, high) = dataset.payload_bounds();
        control_panel.set_payload_bounds(low, high);
        control_panel.set_status(&format!("Loaded {} launch records", dataset.len()));

        Self {
            dataset,
            control_panel,
            load_rx: None,
            is_loading: false,
        }
    }

    /// Handle CSV file selection and load it off the UI thread.
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return; // Already loading
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.control_panel.set_status("Loading CSV file...");
            self.is_loading = true;

            let (tx, rx) = channel();
            self.load_rx = Some(rx);

            thread::spawn(move || {
                let result = LaunchDataLoader::load_csv(&path.to_string_lossy());
                let msg = match result {
                    Ok(dataset) => LoadResult::Complete { dataset, path },
                    Err(e) => LoadResult::Error(e.to_string()),
                };
                let _ = tx.send(msg);
            });
        }
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Complete { dataset, path } => {
                        self.control_panel.update_sites(dataset.sites.clone());
                        let (low, high) = dataset.payload_bounds();
                        self.control_panel.set_payload_bounds(low, high);
                        self.control_panel
                            .set_status(&format!("Loaded {} launch records", dataset.len()));
                        self.control_panel.settings.csv_path = Some(path);
                        self.dataset = dataset;
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        log::error!("CSV load failed: {error}");
                        self.control_panel.set_status(&format!("Error: {error}"));
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            ChartViewer::show(ui, &self.dataset, &self.control_panel.settings);
        });
    }
}
