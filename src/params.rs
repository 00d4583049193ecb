// src/params.rs
//
// Fixed endpoints and output paths. What the pages are expected to look
// like lives with the specs, not here.

pub const VULTR_URL: &str = "https://www.vultr.com/pricing/";
pub const LINODE_URL: &str = "https://www.linode.com/pricing/";

// Relative to the working directory; overwritten every run.
pub const JSON_OUT: &str = "machines.json";
pub const CSV_OUT: &str = "machines.csv";
