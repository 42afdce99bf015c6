//! Static Chart Renderer
//! Renders a `ChartSpec` to a PNG file with plotters.
//!
//! Layout matches the interactive view: title on top, date axis at the bottom,
//! sales line, price increase marker from the bottom to the top of the plot area,
//! and a legend in the upper left corner.

use crate::charts::plotter::ChartPlotter;
use crate::charts::ChartSpec;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

const SALES_RGB: RGBColor = RGBColor(231, 76, 60);
const MARKER_RGB: RGBColor = RGBColor(96, 125, 139);

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Draw `chart` into a PNG at `path`, `width` x `height` pixels.
    pub fn render_png(
        chart: &ChartSpec,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        let (x_range, y_range) = Self::plot_ranges(chart);

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 26))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(x_range, y_range.clone())?;

        ctx.configure_mesh()
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .x_labels(8)
            .x_label_formatter(&|x| {
                ChartPlotter::x_to_date(*x)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default()
            })
            .y_label_formatter(&|y| format!("{y:.0}"))
            .draw()?;

        let points: Vec<(f64, f64)> = chart
            .points
            .iter()
            .map(|p| (ChartPlotter::date_to_x(p.date), p.sales))
            .collect();

        if !points.is_empty() {
            ctx.draw_series(LineSeries::new(points, SALES_RGB.stroke_width(2)))?
                .label("Sales")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &SALES_RGB));
        }

        let marker_x = ChartPlotter::date_to_x(chart.marker.date);
        ctx.draw_series(LineSeries::new(
            vec![(marker_x, y_range.start), (marker_x, y_range.end)],
            MARKER_RGB.stroke_width(2),
        ))?
        .label(chart.marker.label.as_str())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &MARKER_RGB));

        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }

    /// Axis ranges for `chart`: one day of padding either side, 5% headroom on top.
    pub fn plot_ranges(chart: &ChartSpec) -> (Range<f64>, Range<f64>) {
        let (x_min, x_max) = chart.x_bounds();
        let (y_min, y_max) = chart.y_bounds();
        let x_range = (ChartPlotter::date_to_x(x_min) - 1.0)..(ChartPlotter::date_to_x(x_max) + 1.0);
        let y_pad = (y_max - y_min) * 0.05;
        (x_range, y_min..(y_max + y_pad))
    }
}
