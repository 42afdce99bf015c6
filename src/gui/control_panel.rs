//! Control Panel Widget
//! Left side panel with the region filter and export controls.

use crate::data::RegionFilter;
use egui::{Color32, RichText};

pub const APP_HEADING: &str = "Pink Morsel Sales Visualiser";

/// Left side control panel with the region selector.
pub struct ControlPanel {
    pub region: RegionFilter,
    pub dataset_rows: usize,
    pub dropped_rows: usize,
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            region: RegionFilter::All,
            dataset_rows: 0,
            dropped_rows: 0,
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new(region: RegionFilter, dataset_rows: usize, dropped_rows: usize) -> Self {
        Self {
            region,
            dataset_rows,
            dropped_rows,
            ..Self::default()
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new(APP_HEADING)
                    .size(20.0)
                    .color(Color32::from_rgb(233, 30, 99)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Region Section =====
        ui.label(RichText::new("🌍 Region").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                for option in RegionFilter::ALL_OPTIONS {
                    if ui
                        .radio_value(&mut self.region, option, option.label())
                        .changed()
                    {
                        action = ControlPanelAction::RegionChanged(option);
                    }
                }
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export =====
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new("🖼 Export PNG").size(14.0))
                .min_size(egui::vec2(150.0, 30.0));
            if ui.add(button).clicked() {
                action = ControlPanelAction::ExportPng;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Dataset Section =====
        ui.label(RichText::new("📊 Dataset").size(14.0).strong());
        ui.add_space(5.0);
        ui.label(RichText::new(format!("{} sales rows loaded", self.dataset_rows)).size(11.0));
        if self.dropped_rows > 0 {
            ui.label(
                RichText::new(format!("{} invalid rows skipped", self.dropped_rows))
                    .size(11.0)
                    .color(Color32::from_rgb(243, 156, 18)),
            );
        }

        ui.add_space(5.0);
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set the status line
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    RegionChanged(RegionFilter),
    ExportPng,
}
