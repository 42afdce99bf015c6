//! Sales Visualiser Main Application
//! Main window with the region control panel and chart viewer.

use crate::charts::{on_region_selected, RegionSelected, StaticChartRenderer};
use crate::data::{RegionFilter, SalesDataset};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::SidePanel;
use std::sync::Arc;
use tracing::{error, info};

const EXPORT_WIDTH: u32 = 1400;
const EXPORT_HEIGHT: u32 = 800;

/// Main application window.
pub struct SalesApp {
    dataset: Arc<SalesDataset>,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl SalesApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        dataset: Arc<SalesDataset>,
        region: RegionFilter,
    ) -> Self {
        let chart = on_region_selected(&dataset, RegionSelected { region });
        Self {
            control_panel: ControlPanel::new(region, dataset.len(), dataset.dropped_rows()),
            chart_viewer: ChartViewer::new(chart),
            dataset,
        }
    }

    /// Recompute the chart for the newly selected region.
    fn handle_region_changed(&mut self, region: RegionFilter) {
        let chart = on_region_selected(&self.dataset, RegionSelected { region });
        self.control_panel
            .set_status(format!("Showing {} ({} days)", region.label(), chart.points.len()));
        self.chart_viewer.set_chart(chart);
    }

    /// Handle PNG export of the current chart
    fn handle_export_png(&mut self) {
        let file_name = format!("pink_morsel_sales_{}.png", self.chart_viewer.chart.region);
        let output_path = match rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(file_name.as_str())
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        match StaticChartRenderer::render_png(
            &self.chart_viewer.chart,
            &output_path,
            EXPORT_WIDTH,
            EXPORT_HEIGHT,
        ) {
            Ok(()) => {
                info!("Exported chart to {}", output_path.display());
                self.control_panel
                    .set_status(format!("Exported {}", output_path.display()));
                if let Err(e) = open::that(&output_path) {
                    error!("Unable to open {}: {e}", output_path.display());
                }
            }
            Err(e) => {
                error!("Chart export failed: {e}");
                self.control_panel.set_status(format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for SalesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                let action = self.control_panel.show(ui);

                match action {
                    ControlPanelAction::RegionChanged(region) => self.handle_region_changed(region),
                    ControlPanelAction::ExportPng => self.handle_export_png(),
                    ControlPanelAction::None => {}
                }
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
