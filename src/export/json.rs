// src/export/json.rs

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::data::Listing;
use crate::error::Result;

/// Serialize the ordered listing set as a JSON array of flat objects,
/// overwriting `path`. Keys are the record field names (cpu, memory,
/// storage, bandwidth, price).
pub fn write(path: impl AsRef<Path>, listings: &[Listing]) -> Result<PathBuf> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, listings)?;
    out.flush()?;
    Ok(path.to_path_buf())
}
