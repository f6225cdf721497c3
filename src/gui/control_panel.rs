//! Control Panel Widget
//! Left side panel with the launch site selector and payload range controls.

use egui::{Color32, ComboBox, RichText};
use std::path::PathBuf;

use crate::charts::SiteSelection;
use crate::data::{PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP};

/// Current user selections driving both charts.
#[derive(Clone)]
pub struct DashboardSettings {
    pub csv_path: Option<PathBuf>,
    pub selection: SiteSelection,
    pub payload_low: f64,
    pub payload_high: f64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            csv_path: None,
            selection: SiteSelection::All,
            payload_low: PAYLOAD_SLIDER_MIN,
            payload_high: PAYLOAD_SLIDER_MAX,
        }
    }
}

/// Left side control panel with site and payload filters.
pub struct ControlPanel {
    pub settings: DashboardSettings,
    pub sites: Vec<String>,
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: DashboardSettings::default(),
            sites: Vec::new(),
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the available launch sites after a CSV load.
    /// A selection pointing at a site that no longer exists is reset to All.
    pub fn update_sites(&mut self, sites: Vec<String>) {
        if let SiteSelection::Site(selected) = &self.settings.selection {
            if !sites.contains(selected) {
                self.settings.selection = SiteSelection::All;
            }
        }
        self.sites = sites;
    }

    /// Reset the payload sliders to the observed bounds of a new dataset.
    pub fn set_payload_bounds(&mut self, low: f64, high: f64) {
        self.settings.payload_low = low;
        self.settings.payload_high = high;
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🚀 SpaceX Launches")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Launch Records Dashboard")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .settings
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file loaded".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.settings.csv_path.is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseCsv;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Launch Site Section =====
        ui.label(RichText::new("📍 Launch Site").size(14.0).strong());
        ui.add_space(5.0);

        ComboBox::from_id_salt("site_selector")
            .width(220.0)
            .selected_text(self.settings.selection.label().to_string())
            .show_ui(ui, |ui| {
                let all_selected = self.settings.selection == SiteSelection::All;
                if ui.selectable_label(all_selected, "All").clicked() {
                    self.settings.selection = SiteSelection::All;
                }
                for site in &self.sites {
                    let selected = self.settings.selection.label() == site;
                    if ui.selectable_label(selected, site).clicked() {
                        self.settings.selection = SiteSelection::Site(site.clone());
                    }
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Payload Range Section =====
        ui.label(RichText::new("⚖ Payload Range (kg)").size(14.0).strong());
        ui.add_space(5.0);

        ui.add(
            egui::Slider::new(
                &mut self.settings.payload_low,
                PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX,
            )
            .step_by(PAYLOAD_SLIDER_STEP)
            .text("Min"),
        );
        ui.add(
            egui::Slider::new(
                &mut self.settings.payload_high,
                PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX,
            )
            .step_by(PAYLOAD_SLIDER_STEP)
            .text("Max"),
        );

        // An inverted range is allowed; the charts just show nothing
        if self.settings.payload_low > self.settings.payload_high {
            ui.label(
                RichText::new("Min exceeds max - no launches match")
                    .size(11.0)
                    .color(Color32::from_rgb(243, 156, 18)),
            );
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        ui.label(RichText::new("📊 Status").size(14.0).strong());
        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Loaded") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
}
