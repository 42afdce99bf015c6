//! Chart Viewer Widget
//! Central panel showing the current sales chart.

use crate::charts::{ChartPlotter, ChartSpec};
use egui::{Color32, RichText};

/// Holds the chart for the last selected region.
pub struct ChartViewer {
    pub chart: ChartSpec,
}

impl ChartViewer {
    pub fn new(chart: ChartSpec) -> Self {
        Self { chart }
    }

    /// Replace the displayed chart
    pub fn set_chart(&mut self, chart: ChartSpec) {
        self.chart = chart;
    }

    /// Draw the chart. An empty selection still shows axes and the marker.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        if self.chart.is_empty() {
            ui.label(
                RichText::new("No sales for this selection")
                    .size(13.0)
                    .color(Color32::GRAY),
            );
        } else {
            ui.label(
                RichText::new(format!("{} days", self.chart.points.len()))
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        }

        ChartPlotter::draw_sales_chart(ui, &self.chart);
    }
}
