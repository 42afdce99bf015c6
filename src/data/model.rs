//! Sales record types shared by ingestion and presentation.

use chrono::NaiveDate;
use serde::Serialize;

/// Product line kept by ingestion, in normalized form.
pub const TARGET_PRODUCT: &str = "pink morsel";

/// Column names of the intermediate file, in file order.
pub const DATE_COL: &str = "date";
pub const REGION_COL: &str = "region";
pub const SALES_COL: &str = "sales";

/// One cleaned `(date, region, sales)` row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    /// Lowercase, trimmed.
    pub region: String,
    pub sales: f64,
}

impl SalesRecord {
    pub fn new(date: NaiveDate, region: impl Into<String>, sales: f64) -> Self {
        Self {
            date,
            region: region.into(),
            sales,
        }
    }
}

/// The loaded intermediate file. Built once and then only read.
#[derive(Debug, Clone, Default)]
pub struct SalesDataset {
    records: Vec<SalesRecord>,
    dropped_rows: usize,
}

impl SalesDataset {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self {
            records,
            dropped_rows: 0,
        }
    }

    pub(crate) fn with_dropped_rows(mut self, dropped_rows: usize) -> Self {
        self.dropped_rows = dropped_rows;
        self
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows of the source file that failed validation on load.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }
}
