//! Pink Morsel Sales - CSV ETL & Interactive Chart Viewer
//!
//! `process` merges the raw daily sales files into one `date,region,sales` file and
//! `view` charts daily totals with a region filter.

pub mod args;
pub mod charts;
pub mod commands;
pub mod data;
mod error;
pub mod gui;

pub use error::{Error, Result};
