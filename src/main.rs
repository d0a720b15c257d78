//! Batch entry point: extracts the central text column from every page scan
//! in a directory and writes the crops to a mirrored output directory.

use anyhow::Result;
use clap::Parser;
use hebrew_columns::{ColumnExtractor, ExtractionConfig};
use std::path::PathBuf;
use tracing::info;

/// Extract Hebrew text columns from manuscript page images.
#[derive(Parser, Debug)]
#[command(name = "hebrew-columns", version, about)]
struct Args {
    /// Directory containing input page scans
    #[arg(long, default_value = "data/images/philemon")]
    input_dir: PathBuf,

    /// Directory to save cropped columns
    #[arg(long, default_value = "data/temp/philemon")]
    output_dir: PathBuf,

    /// Enable debug-level logging
    #[arg(long, short)]
    verbose: bool,
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let config = ExtractionConfig::default();
    config.validate()?;

    info!(
        input_dir = %args.input_dir.display(),
        output_dir = %args.output_dir.display(),
        "Starting column extraction"
    );

    let extractor = ColumnExtractor::new(args.input_dir, args.output_dir, config);
    let summary = extractor.process_all_images()?;

    if summary.failed > 0 {
        info!(failed = summary.failed, "Some images could not be processed");
    }
    Ok(())
}
