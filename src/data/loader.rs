//! CSV Data Loader Module
//! Handles CSV discovery and loading into Polars frames.

use crate::data::model::{SalesDataset, SalesRecord, DATE_COL, REGION_COL, SALES_COL};
use crate::data::parse::{normalize_text, parse_date};
use polars::prelude::*;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Columns every raw transaction file must provide.
pub const RAW_COLUMNS: [&str; 5] = ["product", "price", "quantity", "date", "region"];

/// Columns of the intermediate sales file.
pub const SALES_COLUMNS: [&str; 3] = [DATE_COL, REGION_COL, SALES_COL];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("No CSV files found in {}", .0.display())]
    NoInputData(PathBuf),
    #[error("Cannot read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: csv::Error,
    },
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("{} is missing required column '{column}'", .path.display())]
    MissingColumn { path: PathBuf, column: String },
}

/// A text-only table plus the count of lines that could not be split into fields.
#[derive(Debug, Clone)]
pub struct TextTable {
    pub frame: DataFrame,
    pub malformed_rows: usize,
}

/// Handles CSV file loading into Polars frames.
pub struct DataLoader;

impl DataLoader {
    /// List the `*.csv` files directly inside `dir`, sorted by path.
    pub fn discover_csv_files(dir: &Path) -> Result<Vec<PathBuf>, LoaderError> {
        let entries = std::fs::read_dir(dir).map_err(|source| LoaderError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
            })
            .collect();

        if files.is_empty() {
            return Err(LoaderError::NoInputData(dir.to_path_buf()));
        }

        files.sort();
        debug!("Found {} CSV files in {}", files.len(), dir.display());
        Ok(files)
    }

    /// Load a CSV with every column read as text, keeping only `columns` in that order.
    ///
    /// Structurally broken lines (wrong field count, invalid UTF-8 in a kept column) are
    /// skipped and counted; only a missing file or missing header column is fatal.
    pub fn load_text_csv(path: &Path, columns: &[&str]) -> Result<TextTable, LoaderError> {
        if !path.is_file() {
            return Err(LoaderError::NotFound(path.to_path_buf()));
        }
        let io_err = |source: csv::Error| LoaderError::Read {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(io_err)?;

        let headers: Vec<String> = reader
            .byte_headers()
            .map_err(io_err)?
            .iter()
            .map(|h| String::from_utf8_lossy(h).trim().to_string())
            .collect();

        let mut indices = Vec::with_capacity(columns.len());
        for column in columns {
            let idx = headers.iter().position(|h| h == column).ok_or_else(|| {
                LoaderError::MissingColumn {
                    path: path.to_path_buf(),
                    column: column.to_string(),
                }
            })?;
            indices.push(idx);
        }

        let mut values: Vec<Vec<Option<String>>> = vec![Vec::new(); columns.len()];
        let mut malformed_rows = 0usize;

        for (row, result) in reader.byte_records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(io_err(e)),
                Err(e) => {
                    debug!("Skipping malformed row {} of {}: {e}", row + 1, path.display());
                    malformed_rows += 1;
                    continue;
                }
            };

            match Self::text_fields(&record, headers.len(), &indices) {
                Some(fields) => {
                    for (column, field) in values.iter_mut().zip(fields) {
                        column.push(field);
                    }
                }
                None => {
                    debug!("Skipping malformed row {} of {}", row + 1, path.display());
                    malformed_rows += 1;
                }
            }
        }

        let frame = DataFrame::new(
            columns
                .iter()
                .zip(values)
                .map(|(name, column)| Column::new((*name).into(), column))
                .collect(),
        )?;
        Ok(TextTable {
            frame,
            malformed_rows,
        })
    }

    /// Pick the kept fields of one record. Blank fields become `None`.
    ///
    /// `None` when the record is ragged or a kept field is not valid UTF-8.
    fn text_fields(
        record: &csv::ByteRecord,
        width: usize,
        indices: &[usize],
    ) -> Option<Vec<Option<String>>> {
        if record.len() != width {
            return None;
        }
        indices
            .iter()
            .map(|&idx| {
                let field = std::str::from_utf8(record.get(idx)?).ok()?;
                Some((!field.is_empty()).then(|| field.to_string()))
            })
            .collect()
    }

    /// Read every raw transaction file and stack them into one table.
    ///
    /// Files are read in parallel; rows keep the order of `files`.
    pub fn load_raw_files(files: &[PathBuf]) -> Result<TextTable, LoaderError> {
        let tables = files
            .par_iter()
            .map(|path| -> Result<TextTable, LoaderError> {
                let table = Self::load_text_csv(path, &RAW_COLUMNS)?;
                debug!(
                    "Read {} rows from {} ({} malformed)",
                    table.frame.height(),
                    path.display(),
                    table.malformed_rows
                );
                Ok(table)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut tables = tables.into_iter();
        let Some(mut combined) = tables.next() else {
            return Ok(TextTable {
                frame: DataFrame::empty(),
                malformed_rows: 0,
            });
        };
        for table in tables {
            combined.frame.vstack_mut(&table.frame)?;
            combined.malformed_rows += table.malformed_rows;
        }
        Ok(combined)
    }

    /// Load the intermediate sales file into an in-memory dataset.
    ///
    /// Malformed lines and rows with a blank region, a bad date or a non-numeric sales
    /// value are dropped.
    pub fn load_sales(path: &Path) -> Result<SalesDataset, LoaderError> {
        let TextTable {
            frame: df,
            malformed_rows,
        } = Self::load_text_csv(path, &SALES_COLUMNS)?;

        let dates = df.column(DATE_COL)?.str()?;
        let regions = df.column(REGION_COL)?.str()?;
        let sales = df.column(SALES_COL)?.str()?;

        let mut records = Vec::with_capacity(df.height());
        let mut dropped = malformed_rows;

        for (line, ((date, region), value)) in dates
            .into_iter()
            .zip(regions.into_iter())
            .zip(sales.into_iter())
            .enumerate()
        {
            match Self::sales_row(date, region, value) {
                Some(record) => records.push(record),
                None => {
                    dropped += 1;
                    debug!("Dropping invalid sales row {}", line + 1);
                }
            }
        }

        info!(
            "Loaded {} sales rows from {} ({} dropped)",
            records.len(),
            path.display(),
            dropped
        );
        Ok(SalesDataset::new(records).with_dropped_rows(dropped))
    }

    fn sales_row(
        date: Option<&str>,
        region: Option<&str>,
        sales: Option<&str>,
    ) -> Option<SalesRecord> {
        let date = parse_date(date?).ok()?;
        let region = normalize_text(region?);
        if region.is_empty() {
            return None;
        }
        let sales = sales?.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        Some(SalesRecord::new(date, region, sales))
    }
}
