use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use wellbeing_priority::adapters::{renderer_for, FileDatasetSource};
use wellbeing_priority::application::{RankAlternativesCommand, RankAlternativesHandler};
use wellbeing_priority::config::AppConfig;
use wellbeing_priority::ports::ReportFormat;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Dataset file (.csv, .json, .yaml or .yml)
    dataset: PathBuf,

    /// Report format (markdown, json, yaml)
    #[arg(short, long)]
    format: Option<ReportFormat>,

    /// Decimals for matrix and distance tables (0-10)
    #[arg(short, long)]
    decimals: Option<usize>,

    /// Only render the summary and ranking
    #[arg(long)]
    summary_only: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(format) = cli.format {
        config.report.format = format;
    }
    if let Some(decimals) = cli.decimals {
        config.report.decimals = decimals;
    }
    if cli.summary_only {
        config.report.include_process_tables = false;
    }
    config.validate().context("Invalid configuration")?;
    config.logging.init_tracing()?;

    info!(dataset = %cli.dataset.display(), format = %config.report.format, "Starting ranking");

    let handler = RankAlternativesHandler::new(Arc::new(FileDatasetSource::new(&cli.dataset)));
    let result = handler.handle(RankAlternativesCommand::new()).await?;

    let report = renderer_for(&config.report).render(&result.run)?;
    println!("{}", report);

    Ok(())
}
