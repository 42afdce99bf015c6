//! Chart Plotter Module
//! Draws a `ChartSpec` as an interactive line chart using egui_plot.

use crate::charts::ChartSpec;
use chrono::{Datelike, NaiveDate};
use egui::{Color32, RichText};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoint, PlotPoints, Points, VLine};

/// Sales line color
pub const SALES_COLOR: Color32 = Color32::from_rgb(231, 76, 60); // Red
/// Price increase marker color
pub const MARKER_COLOR: Color32 = Color32::from_rgb(96, 125, 139); // Blue Grey

/// Draws sales charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Plot x coordinate for a date.
    pub fn date_to_x(date: NaiveDate) -> f64 {
        date.num_days_from_ce() as f64
    }

    /// Inverse of [`ChartPlotter::date_to_x`], rounding to the nearest day.
    pub fn x_to_date(x: f64) -> Option<NaiveDate> {
        if !x.is_finite() || x.abs() > i32::MAX as f64 {
            return None;
        }
        NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
    }

    fn format_x(x: f64) -> String {
        Self::x_to_date(x)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// Draw the line chart with its title and the price increase marker.
    pub fn draw_sales_chart(ui: &mut egui::Ui, chart: &ChartSpec) {
        ui.label(RichText::new(&chart.title).size(18.0).strong());
        ui.add_space(8.0);

        let (x_min, x_max) = chart.x_bounds();
        let (y_min, y_max) = chart.y_bounds();
        let marker_x = Self::date_to_x(chart.marker.date);

        Plot::new("sales_chart")
            .legend(Legend::default())
            .x_axis_label(chart.x_label.clone())
            .y_axis_label(chart.y_label.clone())
            .include_x(Self::date_to_x(x_min) - 1.0)
            .include_x(Self::date_to_x(x_max) + 1.0)
            .include_y(y_min)
            .include_y(y_max)
            .allow_scroll(false)
            .x_axis_formatter(|mark, _range| Self::format_x(mark.value))
            .label_formatter(|name, value: &PlotPoint| {
                let day = Self::format_x(value.x);
                if name.is_empty() {
                    format!("{day}\n${:.2}", value.y)
                } else {
                    format!("{name}\n{day}\n${:.2}", value.y)
                }
            })
            .show(ui, |plot_ui| {
                let points: Vec<[f64; 2]> = chart
                    .points
                    .iter()
                    .map(|p| [Self::date_to_x(p.date), p.sales])
                    .collect();

                if !points.is_empty() {
                    plot_ui.line(
                        Line::new(PlotPoints::from_iter(points.iter().copied()))
                            .color(SALES_COLOR)
                            .width(2.0)
                            .name("Sales"),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from_iter(points.iter().copied()))
                            .radius(2.5)
                            .color(SALES_COLOR),
                    );
                }

                // VLine spans the full visible height at any zoom level
                plot_ui.vline(
                    VLine::new(marker_x)
                        .color(MARKER_COLOR)
                        .width(1.5)
                        .style(LineStyle::dashed_loose())
                        .name(&chart.marker.label),
                );
            });
    }
}
