//! Daily Aggregation Module
//! Groups sales records by date, optionally restricted to one region.

use crate::data::model::SalesRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown region {0:?}, expected one of all, north, south, east, west")]
pub struct UnknownRegion(pub String);

/// Region selection offered by the filter control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionFilter {
    #[default]
    All,
    North,
    South,
    East,
    West,
}

impl RegionFilter {
    /// Every option, in display order.
    pub const ALL_OPTIONS: [RegionFilter; 5] = [
        RegionFilter::All,
        RegionFilter::North,
        RegionFilter::South,
        RegionFilter::East,
        RegionFilter::West,
    ];

    /// Normalized value used in the data, `None` for no restriction.
    pub fn region(self) -> Option<&'static str> {
        match self {
            RegionFilter::All => None,
            RegionFilter::North => Some("north"),
            RegionFilter::South => Some("south"),
            RegionFilter::East => Some("east"),
            RegionFilter::West => Some("west"),
        }
    }

    /// Control label, e.g. "North".
    pub fn label(self) -> &'static str {
        match self {
            RegionFilter::All => "All",
            RegionFilter::North => "North",
            RegionFilter::South => "South",
            RegionFilter::East => "East",
            RegionFilter::West => "West",
        }
    }

    /// Parse a programmatic value, falling back to `All` for anything unknown.
    pub fn parse_or_all(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|e: UnknownRegion| {
            tracing::warn!("{e}; showing all regions");
            RegionFilter::All
        })
    }

    fn matches(self, record: &SalesRecord) -> bool {
        self.region().map_or(true, |r| record.region == r)
    }
}

impl FromStr for RegionFilter {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(RegionFilter::All),
            "north" => Ok(RegionFilter::North),
            "south" => Ok(RegionFilter::South),
            "east" => Ok(RegionFilter::East),
            "west" => Ok(RegionFilter::West),
            _ => Err(UnknownRegion(s.to_string())),
        }
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.region().unwrap_or("all"))
    }
}

/// Summed sales for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub sales: f64,
}

/// Sum sales per date for the selected region, ascending by date.
///
/// Returns an empty vector when nothing matches the filter.
pub fn compute_daily_totals(records: &[SalesRecord], region: RegionFilter) -> Vec<DailyTotal> {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for record in records.iter().filter(|r| region.matches(r)) {
        *by_date.entry(record.date).or_insert(0.0) += record.sales;
    }

    by_date
        .into_iter()
        .map(|(date, sales)| DailyTotal { date, sales })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, day).unwrap()
    }

    fn sample() -> Vec<SalesRecord> {
        vec![
            SalesRecord::new(date(11), "north", 7.0),
            SalesRecord::new(date(10), "north", 10.0),
            SalesRecord::new(date(10), "south", 5.0),
        ]
    }

    #[test]
    fn totals_for_all_regions() {
        let totals = compute_daily_totals(&sample(), RegionFilter::All);
        assert_eq!(
            totals,
            vec![
                DailyTotal { date: date(10), sales: 15.0 },
                DailyTotal { date: date(11), sales: 7.0 },
            ]
        );
    }

    #[test]
    fn totals_for_one_region() {
        let totals = compute_daily_totals(&sample(), RegionFilter::North);
        assert_eq!(
            totals,
            vec![
                DailyTotal { date: date(10), sales: 10.0 },
                DailyTotal { date: date(11), sales: 7.0 },
            ]
        );
    }

    #[test]
    fn totals_are_repeatable() {
        let records = sample();
        let first = compute_daily_totals(&records, RegionFilter::All);
        let second = compute_daily_totals(&records, RegionFilter::All);
        assert_eq!(first, second);
        assert_eq!(records, sample());
    }

    #[test]
    fn region_without_rows_is_empty() {
        assert!(compute_daily_totals(&sample(), RegionFilter::West).is_empty());
        assert!(compute_daily_totals(&[], RegionFilter::All).is_empty());
    }

    #[test]
    fn region_parsing() {
        assert_eq!(" North ".parse::<RegionFilter>(), Ok(RegionFilter::North));
        assert_eq!("ALL".parse::<RegionFilter>(), Ok(RegionFilter::All));
        assert!("central".parse::<RegionFilter>().is_err());
        assert_eq!(RegionFilter::parse_or_all("central"), RegionFilter::All);
        assert_eq!(RegionFilter::parse_or_all("west"), RegionFilter::West);
    }

    #[test]
    fn region_display_is_the_data_value() {
        assert_eq!(RegionFilter::All.to_string(), "all");
        assert_eq!(RegionFilter::East.to_string(), "east");
        assert_eq!(RegionFilter::East.label(), "East");
    }
}
