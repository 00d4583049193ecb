// src/main.rs

use anyhow::Result;
use clap::Parser;

use vps_scrape::cli::Args;
use vps_scrape::runner;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let summary = runner::run(&args.emit_options())?;
    tracing::debug!(
        listings = summary.listings,
        files = summary.files_written.len(),
        "run complete"
    );
    Ok(())
}
