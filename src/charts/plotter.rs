//! Chart Plotter Module
//! Renders the derived chart specs with egui: the success pie via painter
//! polygons, the payload-outcome scatter via egui_plot.

use std::collections::BTreeMap;
use std::f32::consts::TAU;

use egui::{Color32, Pos2, RichText, Sense, Shape, Stroke};
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::charts::{PieSpec, ScatterSpec};

/// Fixed colors for the site-specific Success/Failed slices.
pub const SUCCESS_COLOR: Color32 = Color32::from_rgb(40, 167, 69);
pub const FAILED_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

/// Color palette for sites and booster categories
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

const PIE_DIAMETER: f32 = 280.0;
const SCATTER_HEIGHT: f32 = 320.0;

/// Draws the dashboard charts using egui.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Color for a pie slice. Success/Failed slices use their fixed colors,
    /// site slices cycle through the palette.
    pub fn slice_color(label: &str, slice_index: usize) -> Color32 {
        match label {
            "Success" => SUCCESS_COLOR,
            "Failed" => FAILED_COLOR,
            _ => PALETTE[slice_index % PALETTE.len()],
        }
    }

    /// Color for a booster category series in the scatter chart.
    pub fn booster_color(series_index: usize) -> Color32 {
        PALETTE[series_index % PALETTE.len()]
    }

    /// Draw the success pie chart with its legend.
    /// An all-zero distribution renders a placeholder instead of failing.
    pub fn draw_pie_chart(ui: &mut egui::Ui, spec: &PieSpec) {
        Self::draw_pie_legend(ui, spec);
        ui.add_space(8.0);

        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(PIE_DIAMETER, PIE_DIAMETER), Sense::hover());
        let center = rect.center();
        let radius = PIE_DIAMETER / 2.0 - 4.0;

        let total = spec.total();
        if total == 0 {
            ui.painter().text(
                center,
                egui::Align2::CENTER_CENTER,
                "No launches in view",
                egui::FontId::proportional(14.0),
                ui.visuals().weak_text_color(),
            );
            return;
        }

        // Slices start at 12 o'clock and sweep clockwise. Each slice is a
        // triangle fan so reflex angles render correctly.
        let mut angle = -TAU / 4.0;
        for (i, slice) in spec.slices.iter().enumerate() {
            if slice.value == 0 {
                continue;
            }
            let sweep = (slice.value as f32 / total as f32) * TAU;
            let color = Self::slice_color(&slice.label, i);

            let steps = ((sweep / 0.05).ceil() as usize).max(2);
            let arc_point = |a: f32| -> Pos2 {
                Pos2::new(center.x + radius * a.cos(), center.y + radius * a.sin())
            };
            for step in 0..steps {
                let a0 = angle + sweep * step as f32 / steps as f32;
                let a1 = angle + sweep * (step + 1) as f32 / steps as f32;
                ui.painter().add(Shape::convex_polygon(
                    vec![center, arc_point(a0), arc_point(a1)],
                    color,
                    Stroke::NONE,
                ));
            }
            angle += sweep;
        }

        ui.painter()
            .circle_stroke(center, radius, Stroke::new(1.0, Color32::from_gray(60)));
    }

    /// Horizontal legend of color squares and labeled counts.
    fn draw_pie_legend(ui: &mut egui::Ui, spec: &PieSpec) {
        ui.horizontal_wrapped(|ui| {
            for (i, slice) in spec.slices.iter().enumerate() {
                let color = Self::slice_color(&slice.label, i);

                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), Sense::hover());
                ui.painter().rect_filled(rect, 3.0, color);
                ui.label(
                    RichText::new(format!("{} ({})", slice.label, slice.value)).size(12.0),
                );
                ui.add_space(10.0);
            }
        });
    }

    /// Draw the payload-outcome scatter chart.
    /// X = payload mass, Y = outcome class, one series per booster category.
    pub fn draw_scatter_chart(ui: &mut egui::Ui, spec: &ScatterSpec) {
        // Group points by booster category, sorted so colors stay stable
        let mut by_booster: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
        for record in &spec.points {
            by_booster
                .entry(record.booster_category.as_str())
                .or_default()
                .push([record.payload_mass_kg, record.outcome.as_plot_y()]);
        }

        Plot::new("payload_scatter")
            .height(SCATTER_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("Payload Mass (kg)")
            .y_axis_label("Class")
            .include_y(-0.25)
            .include_y(1.25)
            .y_axis_formatter(|mark, _range| {
                let v = mark.value;
                if (v - 0.0).abs() < 1e-6 {
                    "0".to_string()
                } else if (v - 1.0).abs() < 1e-6 {
                    "1".to_string()
                } else {
                    String::new()
                }
            })
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                for (i, (booster, points)) in by_booster.into_iter().enumerate() {
                    plot_ui.points(
                        Points::new(PlotPoints::new(points))
                            .radius(4.0)
                            .color(Self::booster_color(i))
                            .name(booster),
                    );
                }
            });
    }
}
