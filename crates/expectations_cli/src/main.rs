mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use expectations_validator::ReportFormat;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "data-validator")]
#[command(version, about = "Validate delimited data against an expectation suite", long_about = None)]
struct Cli {
    /// Path to the input data file (pipe-delimited, header row first)
    #[arg(long, alias = "data_file")]
    data_file: PathBuf,

    /// Path to the validation results file
    #[arg(long, alias = "result_file")]
    result_file: PathBuf,

    /// Path to the configuration file (JSON, YAML or TOML)
    #[arg(long, alias = "config_file")]
    config_file: PathBuf,

    /// Report format: text, json
    #[arg(short, long, default_value = "text")]
    format: ReportFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    commands::validate::execute(
        &cli.data_file,
        &cli.result_file,
        &cli.config_file,
        cli.format,
    )
}
