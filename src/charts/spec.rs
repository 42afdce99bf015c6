//! Chart Specification Module
//! Framework-free description of the sales line chart and the filter event handler.

use crate::data::{compute_daily_totals, DailyTotal, RegionFilter, SalesDataset};
use chrono::NaiveDate;
use serde::Serialize;

pub const CHART_TITLE: &str = "Pink Morsel Sales Over Time";
pub const X_LABEL: &str = "Date";
pub const Y_LABEL: &str = "Total Sales ($)";

/// Day the Pink Morsel price was raised.
pub fn price_increase_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, 15).unwrap_or(NaiveDate::MIN)
}

/// Vertical reference line drawn across the whole plot height.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub date: NaiveDate,
    pub label: String,
}

impl Marker {
    pub fn price_increase() -> Self {
        let date = price_increase_date();
        Self {
            date,
            label: format!("Price increase ({})", date.format("%Y-%m-%d")),
        }
    }
}

/// Everything needed to draw one line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub region: RegionFilter,
    pub points: Vec<DailyTotal>,
    pub marker: Marker,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Date span covering every point and the marker.
    pub fn x_bounds(&self) -> (NaiveDate, NaiveDate) {
        let marker = self.marker.date;
        let first = self.points.first().map_or(marker, |p| p.date.min(marker));
        let last = self.points.last().map_or(marker, |p| p.date.max(marker));
        (first, last)
    }

    /// Sales span starting at zero. Never degenerate.
    pub fn y_bounds(&self) -> (f64, f64) {
        let max = self.points.iter().map(|p| p.sales).fold(0.0, f64::max);
        let min = self.points.iter().map(|p| p.sales).fold(0.0, f64::min);
        if max - min <= f64::EPSILON {
            (min, min + 1.0)
        } else {
            (min, max)
        }
    }
}

/// Title for the selected region, e.g. "Pink Morsel Sales Over Time: North".
pub fn chart_title(region: RegionFilter) -> String {
    match region {
        RegionFilter::All => format!("{CHART_TITLE}: All Regions"),
        other => format!("{CHART_TITLE}: {}", other.label()),
    }
}

/// Build the chart for already aggregated totals.
pub fn build_chart(points: Vec<DailyTotal>, region: RegionFilter) -> ChartSpec {
    ChartSpec {
        title: chart_title(region),
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
        region,
        points,
        marker: Marker::price_increase(),
    }
}

/// The user picked a region in the filter control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSelected {
    pub region: RegionFilter,
}

/// Recompute the chart for a filter change. Reads the dataset, never mutates it.
pub fn on_region_selected(dataset: &SalesDataset, event: RegionSelected) -> ChartSpec {
    let totals = compute_daily_totals(dataset.records(), event.region);
    tracing::debug!(
        region = %event.region,
        points = totals.len(),
        "Recomputed daily totals"
    );
    build_chart(totals, event.region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SalesRecord;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, day).unwrap()
    }

    fn dataset() -> SalesDataset {
        SalesDataset::new(vec![
            SalesRecord::new(date(10), "north", 10.0),
            SalesRecord::new(date(10), "south", 5.0),
            SalesRecord::new(date(11), "north", 7.0),
        ])
    }

    #[test]
    fn title_names_the_region() {
        assert_eq!(
            chart_title(RegionFilter::All),
            "Pink Morsel Sales Over Time: All Regions"
        );
        assert_eq!(
            chart_title(RegionFilter::South),
            "Pink Morsel Sales Over Time: South"
        );
    }

    #[test]
    fn marker_is_the_price_increase() {
        let chart = build_chart(Vec::new(), RegionFilter::All);
        assert_eq!(chart.marker.date, date(15));
        assert_eq!(chart.marker.label, "Price increase (2021-01-15)");
        assert_eq!(chart.x_label, "Date");
        assert_eq!(chart.y_label, "Total Sales ($)");
    }

    #[test]
    fn region_event_rebuilds_chart() {
        let data = dataset();
        let all = on_region_selected(&data, RegionSelected { region: RegionFilter::All });
        assert_eq!(all.points.len(), 2);
        assert_eq!(all.points[0].sales, 15.0);

        let north = on_region_selected(&data, RegionSelected { region: RegionFilter::North });
        assert_eq!(north.region, RegionFilter::North);
        assert_eq!(
            north.points.iter().map(|p| p.sales).collect::<Vec<_>>(),
            vec![10.0, 7.0]
        );

        let again = on_region_selected(&data, RegionSelected { region: RegionFilter::North });
        assert_eq!(north, again);
    }

    #[test]
    fn empty_chart_has_usable_bounds() {
        let chart = on_region_selected(&dataset(), RegionSelected { region: RegionFilter::West });
        assert!(chart.is_empty());
        assert_eq!(chart.x_bounds(), (date(15), date(15)));
        assert_eq!(chart.y_bounds(), (0.0, 1.0));
    }

    #[test]
    fn bounds_include_marker() {
        let chart = on_region_selected(&dataset(), RegionSelected { region: RegionFilter::All });
        assert_eq!(chart.x_bounds(), (date(10), date(15)));
        assert_eq!(chart.y_bounds(), (0.0, 15.0));
    }

    #[test]
    fn chart_serializes_to_json() {
        let chart = on_region_selected(&dataset(), RegionSelected { region: RegionFilter::North });
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["region"], "north");
        assert_eq!(json["points"][0]["date"], "2021-01-10");
        assert_eq!(json["marker"]["label"], "Price increase (2021-01-15)");
    }
}
