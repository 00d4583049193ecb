// src/scrape.rs
//
// Fetch + extract, one vendor at a time. Strictly sequential: a vendor's
// response is fully consumed before the next request goes out, and any
// single failure aborts the run with no partial output.

use tracing::info;

use crate::data::Listing;
use crate::error::Result;
use crate::{net, params, specs};

pub fn collect_vultr() -> Result<Vec<Listing>> {
    let page = net::http_get(params::VULTR_URL)?;
    let listings = specs::vultr::extract(&page)?;
    info!(count = listings.len(), "vultr: extracted listings");
    Ok(listings)
}

pub fn collect_linode() -> Result<Vec<Listing>> {
    let page = net::http_get(params::LINODE_URL)?;
    let listings = specs::linode::extract(&page)?;
    info!(count = listings.len(), "linode: extracted listings");
    Ok(listings)
}

/// All vendors in fixed order: Vultr first, Linode appended after.
/// Per-vendor document order is preserved.
pub fn collect_all() -> Result<Vec<Listing>> {
    let mut listings = collect_vultr()?;
    listings.extend(collect_linode()?);
    Ok(listings)
}
