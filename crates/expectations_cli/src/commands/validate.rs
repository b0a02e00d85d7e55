use anyhow::{Context, Result};
use expectations_parser::parse_file;
use expectations_validator::{render, DataValidator, DelimitedReader, ReportFormat};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::output;

/// Loads the suite, runs it over the data file and writes the report.
///
/// The configuration is loaded before any file is opened, so a bad
/// configuration never truncates an existing report. A suite that fails
/// is still a completed run.
pub fn execute(
    data_path: &Path,
    result_path: &Path,
    config_path: &Path,
    format: ReportFormat,
) -> Result<()> {
    info!("Loading expectations: {}", config_path.display());

    let suite = parse_file(config_path).with_context(|| {
        format!(
            "Failed to load configuration file: {}",
            config_path.display()
        )
    })?;

    output::print_info(&format!(
        "Suite loaded: {} ({} expectations)",
        suite.name(),
        suite.len()
    ));

    let rows = DelimitedReader::open(data_path)
        .with_context(|| format!("Failed to read data file: {}", data_path.display()))?;

    let file = File::create(result_path).with_context(|| {
        format!(
            "Failed to create results file: {}",
            result_path.display()
        )
    })?;
    let mut writer = BufWriter::new(file);

    info!("Validating data: {}", data_path.display());
    let outcome = DataValidator::new(suite)
        .validate(rows)
        .with_context(|| format!("Validation aborted: {}", data_path.display()))?;

    writer
        .write_all(render(&outcome, format).as_bytes())
        .and_then(|_| writer.flush())
        .with_context(|| {
            format!(
                "Failed to write results file: {}",
                result_path.display()
            )
        })?;

    output::print_summary(&outcome, result_path);

    Ok(())
}
