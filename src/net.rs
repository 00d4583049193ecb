// src/net.rs
//
// One unauthenticated GET per call. No retries, no custom headers, no
// timeout override, no caching; a failed fetch fails the run.

use crate::error::{Error, Result};

pub fn http_get(url: &str) -> Result<String> {
    let resp = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| Error::Http {
            url: url.to_string(),
            source: e,
        })?;
    resp.text().map_err(|e| Error::Http {
        url: url.to_string(),
        source: e,
    })
}
