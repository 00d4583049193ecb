// src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Network-level failure: DNS, connect, or a non-2xx status.
    #[error("GET {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A vendor page no longer matches its hardcoded structural contract.
    /// Carries which vendor and which field lookup came up empty, so a
    /// drifted page reads as "page changed", not as an index fault.
    #[error("{vendor} pricing page structure changed: {detail}")]
    PageStructure {
        vendor: &'static str,
        detail: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn structure(vendor: &'static str, detail: impl Into<String>) -> Self {
        Error::PageStructure {
            vendor,
            detail: detail.into(),
        }
    }
}
