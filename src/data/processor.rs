//! Data Processor Module
//! Cleans raw transaction rows into sales records and writes the intermediate file.

use crate::data::loader::{DataLoader, LoaderError};
use crate::data::model::{SalesRecord, DATE_COL, REGION_COL, SALES_COL, TARGET_PRODUCT};
use crate::data::parse::{normalize_text, parse_currency, parse_date, parse_quantity, ParseError};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Where ingestion reads from and writes to.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    pub data_dir: PathBuf,
    pub output: PathBuf,
}

/// Counts produced by one ingestion run.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestReport {
    pub files_read: usize,
    pub rows_read: usize,
    pub rows_kept: usize,
    pub rows_other_product: usize,
    pub rows_invalid: usize,
    pub output: PathBuf,
}

/// Result of cleaning the combined raw table.
#[derive(Debug, Clone, Default)]
pub struct CleanedSales {
    pub records: Vec<SalesRecord>,
    pub rows_other_product: usize,
    pub rows_invalid: usize,
}

enum RowOutcome {
    Kept(SalesRecord),
    OtherProduct,
    Invalid(ParseError),
}

/// Handles data cleaning and transformation operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Run the whole pipeline: discover, read, clean, write.
    pub fn run_ingest(config: &IngestConfig) -> Result<IngestReport, ProcessorError> {
        let files = DataLoader::discover_csv_files(&config.data_dir)?;
        let raw = DataLoader::load_raw_files(&files)?;
        let rows_read = raw.frame.height() + raw.malformed_rows;

        let cleaned = Self::clean_raw(&raw.frame)?;
        Self::write_sales_csv(&cleaned.records, &config.output)?;

        let report = IngestReport {
            files_read: files.len(),
            rows_read,
            rows_kept: cleaned.records.len(),
            rows_other_product: cleaned.rows_other_product,
            rows_invalid: cleaned.rows_invalid + raw.malformed_rows,
            output: config.output.clone(),
        };
        info!(
            files = report.files_read,
            read = report.rows_read,
            kept = report.rows_kept,
            other_product = report.rows_other_product,
            invalid = report.rows_invalid,
            "Wrote {}",
            report.output.display()
        );
        Ok(report)
    }

    /// Filter the combined raw table to the target product and derive sales.
    ///
    /// Expects the text columns produced by [`DataLoader::load_raw_files`].
    pub fn clean_raw(df: &DataFrame) -> Result<CleanedSales, ProcessorError> {
        let mut cleaned = CleanedSales::default();
        if df.width() == 0 {
            return Ok(cleaned);
        }

        let product = df.column("product")?.str()?;
        let price = df.column("price")?.str()?;
        let quantity = df.column("quantity")?.str()?;
        let date = df.column("date")?.str()?;
        let region = df.column("region")?.str()?;

        for i in 0..df.height() {
            let outcome = Self::clean_row(
                product.get(i),
                price.get(i),
                quantity.get(i),
                date.get(i),
                region.get(i),
            );
            match outcome {
                RowOutcome::Kept(record) => cleaned.records.push(record),
                RowOutcome::OtherProduct => cleaned.rows_other_product += 1,
                RowOutcome::Invalid(reason) => {
                    debug!("Dropping raw row {i}: {reason}");
                    cleaned.rows_invalid += 1;
                }
            }
        }

        Ok(cleaned)
    }

    fn clean_row(
        product: Option<&str>,
        price: Option<&str>,
        quantity: Option<&str>,
        date: Option<&str>,
        region: Option<&str>,
    ) -> RowOutcome {
        if product.map(normalize_text).as_deref() != Some(TARGET_PRODUCT) {
            return RowOutcome::OtherProduct;
        }

        match Self::parse_row(price, quantity, date, region) {
            Ok(record) => RowOutcome::Kept(record),
            Err(reason) => RowOutcome::Invalid(reason),
        }
    }

    fn parse_row(
        price: Option<&str>,
        quantity: Option<&str>,
        date: Option<&str>,
        region: Option<&str>,
    ) -> Result<SalesRecord, ParseError> {
        let price = parse_currency(price.ok_or(ParseError::Empty)?)?;
        let quantity = parse_quantity(quantity.ok_or(ParseError::Empty)?)?;
        let date = parse_date(date.ok_or(ParseError::Empty)?)?;
        let region = normalize_text(region.ok_or(ParseError::Empty)?);
        if region.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(SalesRecord::new(date, region, quantity as f64 * price))
    }

    /// Build the three-column intermediate table.
    pub fn to_frame(records: &[SalesRecord]) -> Result<DataFrame, ProcessorError> {
        let dates: Vec<String> = records
            .iter()
            .map(|r| r.date.format("%Y-%m-%d").to_string())
            .collect();
        let regions: Vec<&str> = records.iter().map(|r| r.region.as_str()).collect();
        let sales: Vec<f64> = records.iter().map(|r| r.sales).collect();

        let df = DataFrame::new(vec![
            Column::new(DATE_COL.into(), dates),
            Column::new(REGION_COL.into(), regions),
            Column::new(SALES_COL.into(), sales),
        ])?;
        Ok(df)
    }

    /// Replace `output` with the given records.
    ///
    /// The CSV is written to a sibling temp file first and renamed into place, so readers
    /// never observe a partial file.
    pub fn write_sales_csv(records: &[SalesRecord], output: &Path) -> Result<(), ProcessorError> {
        let write_err = |source: std::io::Error| ProcessorError::Write {
            path: output.to_path_buf(),
            source,
        };

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let file_name = output
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "sales.csv".to_string());
        let tmp_path = output.with_file_name(format!(".{file_name}.tmp"));

        let mut df = Self::to_frame(records)?;
        let written = Self::write_frame(&mut df, &tmp_path).and_then(|()| {
            fs::rename(&tmp_path, output).map_err(write_err)
        });

        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        debug!("Renamed {} to {}", tmp_path.display(), output.display());
        Ok(())
    }

    /// Write `df` as CSV to `path` and flush it to disk.
    fn write_frame(df: &mut DataFrame, path: &Path) -> Result<(), ProcessorError> {
        let write_err = |source: std::io::Error| ProcessorError::Write {
            path: path.to_path_buf(),
            source,
        };
        let mut file = File::create(path).map_err(write_err)?;
        CsvWriter::new(&mut file).include_header(true).finish(df)?;
        file.sync_all().map_err(write_err)
    }
}
