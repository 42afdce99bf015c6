//! These structs provide the CLI interface for the morsel program.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// morsel: Pink Morsel sales processing and visualisation.
///
/// Run `morsel process` once to turn the raw daily sales CSV files into a single
/// `date,region,sales` file, then `morsel view` to explore daily sales by region.
#[derive(Debug, Parser, Clone)]
#[command(version)]
pub struct Args {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, global = true, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(log_level: LevelFilter, command: Command) -> Self {
        Self { log_level, command }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Merge and clean the raw CSV files into the processed sales file.
    ///
    /// Every `*.csv` in the data directory is read. Only Pink Morsel rows are kept, prices
    /// like `$3.00` are parsed, and sales is computed as quantity times price. Rows that
    /// cannot be parsed are skipped. The output file is replaced on every run.
    Process(ProcessArgs),
    /// Open the interactive sales chart.
    View(ViewArgs),
}

/// Args for the `morsel process` command.
#[derive(Debug, Parser, Clone)]
pub struct ProcessArgs {
    /// Directory holding the raw daily sales CSV files.
    #[arg(long, env = "MORSEL_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Where to write the processed sales file.
    #[arg(long, env = "MORSEL_OUTPUT", default_value = "processed_sales.csv")]
    output: PathBuf,
}

impl ProcessArgs {
    pub fn new(data_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            output: output.into(),
        }
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn output(&self) -> &PathBuf {
        &self.output
    }
}

/// Args for the `morsel view` command.
#[derive(Debug, Parser, Clone)]
pub struct ViewArgs {
    /// The processed sales file written by `morsel process`.
    #[arg(long, env = "MORSEL_INPUT", default_value = "processed_sales.csv")]
    input: PathBuf,

    /// Region selected when the chart first opens: all, north, south, east or west.
    /// Unknown values show all regions.
    #[arg(long, default_value = "all")]
    region: String,

    /// Print the chart as JSON instead of opening a window.
    #[arg(long)]
    print_json: bool,
}

impl ViewArgs {
    pub fn new(input: impl Into<PathBuf>, region: impl Into<String>, print_json: bool) -> Self {
        Self {
            input: input.into(),
            region: region.into(),
            print_json,
        }
    }

    pub fn input(&self) -> &PathBuf {
        &self.input
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn print_json(&self) -> bool {
        self.print_json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_defaults() {
        let args = Args::try_parse_from(["morsel", "process"]).unwrap();
        assert_eq!(args.log_level(), LevelFilter::INFO);
        match args.command() {
            Command::Process(p) => {
                assert_eq!(p.data_dir(), &PathBuf::from("data"));
                assert_eq!(p.output(), &PathBuf::from("processed_sales.csv"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn view_flags() {
        let args = Args::try_parse_from([
            "morsel",
            "view",
            "--input",
            "out.csv",
            "--region",
            "north",
            "--print-json",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.log_level(), LevelFilter::DEBUG);
        match args.command() {
            Command::View(v) => {
                assert_eq!(v.input(), &PathBuf::from("out.csv"));
                assert_eq!(v.region(), "north");
                assert!(v.print_json());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
