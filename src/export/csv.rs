// src/export/csv.rs

use std::path::{Path, PathBuf};

// Leading :: because this module shadows the crate name.
use ::csv::Writer;

use crate::data::{COLUMNS, Listing};
use crate::error::Result;

/// Write the header record plus one record per listing, overwriting
/// `path`. Header labels are the human-readable column names, not the
/// JSON keys; field order matches the console table.
pub fn write(path: impl AsRef<Path>, listings: &[Listing]) -> Result<PathBuf> {
    let path = path.as_ref();
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(COLUMNS)?;
    for l in listings {
        wtr.write_record(l.fields())?;
    }
    wtr.flush()?;
    Ok(path.to_path_buf())
}
