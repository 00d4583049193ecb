// src/runner.rs

use std::path::PathBuf;

use tracing::info;

use crate::cli::EmitOptions;
use crate::error::Result;
use crate::export::{console, csv, json};
use crate::{params, scrape};

/// What one run produced.
pub struct RunSummary {
    pub listings: usize,
    pub files_written: Vec<PathBuf>,
}

/// Fetch everything, then hand the full collection to each requested
/// sink. Sinks run in fixed order: console, JSON, CSV.
pub fn run(emit: &EmitOptions) -> Result<RunSummary> {
    let listings = scrape::collect_all()?;

    let mut files_written = Vec::new();

    if emit.console {
        console::print(&listings);
    }
    if emit.json {
        let path = json::write(params::JSON_OUT, &listings)?;
        info!(path = %path.display(), "wrote JSON");
        files_written.push(path);
    }
    if emit.csv {
        let path = csv::write(params::CSV_OUT, &listings)?;
        info!(path = %path.display(), "wrote CSV");
        files_written.push(path);
    }

    Ok(RunSummary {
        listings: listings.len(),
        files_written,
    })
}
