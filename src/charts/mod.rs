//! Charts module - Chart specification and rendering

mod plotter;
mod renderer;
mod spec;

pub use plotter::ChartPlotter;
pub use renderer::StaticChartRenderer;
pub use spec::{
    build_chart, chart_title, on_region_selected, price_increase_date, ChartSpec, Marker,
    RegionSelected,
};
