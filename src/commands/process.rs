use crate::args::ProcessArgs;
use crate::commands::Out;
use crate::data::{DataProcessor, IngestConfig};
use crate::Result;
use anyhow::Context;

/// Run ingestion and summarize the result.
pub fn process(args: &ProcessArgs) -> Result<Out> {
    let config = IngestConfig {
        data_dir: args.data_dir().clone(),
        output: args.output().clone(),
    };
    let report = DataProcessor::run_ingest(&config).with_context(|| {
        format!(
            "Unable to process sales data from {}",
            config.data_dir.display()
        )
    })?;

    Ok(Out::new(format!(
        "Data processing complete\nOutput file: {}\nRows generated: {}",
        report.output.display(),
        report.rows_kept
    )))
}
