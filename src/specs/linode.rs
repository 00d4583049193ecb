// src/specs/linode.rs
//
// Structural contract (https://www.linode.com/pricing/, shared plans):
//
//   table.plans-table
//     thead                          column labels, skipped
//     tbody tr                       one per plan
//       td × 7, read positionally:
//         [1] price      "$5/mo"
//         [3] memory     "1 GB"
//         [4] cpu        "1 CPU"
//         [5] storage    "25 GB SSD"
//         [6] bandwidth  "1 TB"
//
// [0] is the plan name and [2] the hourly rate; neither maps to a
// listing field.

use scraper::{ElementRef, Html};

use super::{sel, text_of};
use crate::data::Listing;
use crate::error::{Error, Result};

const VENDOR: &str = "linode";

/// Extract all shared-plan listings, in document order.
/// No rows (or no plans table at all) is an empty set, not an error.
pub fn extract(page: &str) -> Result<Vec<Listing>> {
    let doc = Html::parse_document(page);
    let row_sel = sel("table.plans-table tbody tr");
    let cell_sel = sel("td");

    let mut out = Vec::new();
    for row in doc.select(&row_sel) {
        let cells: Vec<ElementRef> = row.select(&cell_sel).collect();
        out.push(listing_from_row(&cells)?);
    }
    Ok(out)
}

fn listing_from_row(cells: &[ElementRef]) -> Result<Listing> {
    let price = cell_text(cells, 1, "price")?;
    let memory = cell_text(cells, 3, "memory")?;
    let cpu = cell_text(cells, 4, "cpu")?;
    let storage = cell_text(cells, 5, "storage")?;
    let bandwidth = cell_text(cells, 6, "bandwidth")?;
    Ok(Listing::new(cpu, memory, storage, bandwidth, price))
}

fn cell_text(cells: &[ElementRef], ix: usize, field: &'static str) -> Result<String> {
    cells
        .get(ix)
        .map(|c| text_of(*c))
        .ok_or_else(|| Error::structure(VENDOR, format!("{field} cell [{ix}] missing")))
}
