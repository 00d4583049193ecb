// src/data.rs
//
// The one record type the whole pipeline moves around.

use serde::{Deserialize, Serialize};

/// Column labels shared by the console table and the CSV header.
/// Human-readable on purpose; the JSON keys are the field names below.
pub const COLUMNS: [&str; 5] = ["CPU/vCPU", "Memory", "SSD", "Bandwidth", "Price"];

/// One priceable machine configuration, flattened to display strings.
/// Values are verbatim page text (whitespace-normalized): no numeric
/// parsing, no unit or currency normalization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub cpu: String,
    pub memory: String,
    pub storage: String,
    pub bandwidth: String,
    pub price: String,
}

impl Listing {
    /// Sole constructor. A listing is complete or it does not exist;
    /// there is no partially-filled state to leak into the sinks.
    pub fn new(
        cpu: impl Into<String>,
        memory: impl Into<String>,
        storage: impl Into<String>,
        bandwidth: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            cpu: cpu.into(),
            memory: memory.into(),
            storage: storage.into(),
            bandwidth: bandwidth.into(),
            price: price.into(),
        }
    }

    /// Field values in canonical column order (console and CSV agree).
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.cpu,
            &self.memory,
            &self.storage,
            &self.bandwidth,
            &self.price,
        ]
    }
}
