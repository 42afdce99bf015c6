//! Data module - CSV ingestion, loading and aggregation

mod aggregate;
mod loader;
mod model;
pub mod parse;
mod processor;

pub use aggregate::{compute_daily_totals, DailyTotal, RegionFilter, UnknownRegion};
pub use loader::{DataLoader, LoaderError, TextTable, RAW_COLUMNS, SALES_COLUMNS};
pub use model::{SalesDataset, SalesRecord, TARGET_PRODUCT};
pub use processor::{CleanedSales, DataProcessor, IngestConfig, IngestReport, ProcessorError};
