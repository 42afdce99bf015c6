use crate::args::ViewArgs;
use crate::charts::{on_region_selected, RegionSelected};
use crate::commands::Out;
use crate::data::{DataLoader, RegionFilter, SalesDataset};
use crate::gui::{SalesApp, APP_HEADING};
use crate::Result;
use anyhow::{anyhow, Context};
use std::sync::Arc;
use tracing::debug;

/// Load the processed sales file and open the chart window, or print the chart as JSON.
pub fn view(args: &ViewArgs) -> Result<Out> {
    let dataset = DataLoader::load_sales(args.input()).with_context(|| {
        format!(
            "Unable to load sales data from {}. Run `morsel process` first",
            args.input().display()
        )
    })?;
    let dataset = Arc::new(dataset);
    let region = RegionFilter::parse_or_all(args.region());

    if args.print_json() {
        return Ok(Out::new(chart_json(&dataset, region)?));
    }

    debug!("Opening viewer with region {region}");
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 750.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title(APP_HEADING),
        ..Default::default()
    };

    eframe::run_native(
        APP_HEADING,
        options,
        Box::new(move |cc| Ok(Box::new(SalesApp::new(cc, dataset, region)))),
    )
    .map_err(|e| anyhow!("Viewer failed: {e}"))?;

    Ok(Out::empty())
}

/// Build the chart for `region` and serialize it.
pub fn chart_json(dataset: &SalesDataset, region: RegionFilter) -> Result<String> {
    let chart = on_region_selected(dataset, RegionSelected { region });
    serde_json::to_string_pretty(&chart).context("Unable to serialize chart")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SalesRecord;
    use chrono::NaiveDate;

    #[test]
    fn json_contains_points_and_marker() {
        let day = NaiveDate::from_ymd_opt(2021, 1, 10).unwrap();
        let dataset = SalesDataset::new(vec![
            SalesRecord::new(day, "north", 10.0),
            SalesRecord::new(day, "east", 2.5),
        ]);
        let json = chart_json(&dataset, RegionFilter::East).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "Pink Morsel Sales Over Time: East");
        assert_eq!(value["points"].as_array().unwrap().len(), 1);
        assert_eq!(value["points"][0]["sales"], 2.5);
        assert_eq!(value["marker"]["date"], "2021-01-15");
    }
}
