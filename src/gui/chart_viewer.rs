//! Chart Viewer Widget
//! Central scrollable panel showing the success pie chart and the
//! payload-outcome scatter chart for the current selections.

use egui::{Color32, RichText, ScrollArea};

use crate::charts::{payload_scatter, success_breakdown, ChartPlotter, PayloadRange};
use crate::data::LaunchDataset;
use crate::gui::control_panel::DashboardSettings;

const CARD_SPACING: f32 = 15.0;

/// Central chart area. Both derivations are pure and cheap, so they are
/// recomputed from the current settings every frame.
pub struct ChartViewer;

impl ChartViewer {
    /// Draw the dashboard heading and both chart cards.
    pub fn show(ui: &mut egui::Ui, dataset: &LaunchDataset, settings: &DashboardSettings) {
        if dataset.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        let pie = success_breakdown(&settings.selection, &dataset.records);
        let range = PayloadRange::new(settings.payload_low, settings.payload_high);
        let scatter = payload_scatter(&settings.selection, range, &dataset.records);

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("SpaceX Launch Records Dashboard")
                            .size(24.0)
                            .strong(),
                    );
                });
                ui.add_space(CARD_SPACING);

                Self::chart_card(ui, &pie.title, |ui| {
                    ChartPlotter::draw_pie_chart(ui, &pie);
                });
                ui.add_space(CARD_SPACING);

                Self::chart_card(ui, &scatter.title, |ui| {
                    ui.label(
                        RichText::new(format!("{} launches in view", scatter.points.len()))
                            .size(11.0)
                            .color(Color32::GRAY),
                    );
                    ui.add_space(4.0);
                    ChartPlotter::draw_scatter_chart(ui, &scatter);
                });
                ui.add_space(CARD_SPACING);
            });
    }

    /// Draw a single framed chart card with a title.
    fn chart_card(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, Color32::from_gray(80)))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(title).size(16.0).strong());
                ui.add_space(8.0);
                add_contents(ui);
            });
    }
}
