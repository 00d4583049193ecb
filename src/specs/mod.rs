// src/specs/mod.rs
//! Page-specific scraping specs.
//!
//! Each spec encodes *where the ground truth lives in the HTML* for one
//! vendor's pricing page: a fixed row selector plus fixed child positions
//! per field. The contract is written out at the top of each spec. When a
//! page drifts from it, extraction raises [`Error::PageStructure`] naming
//! the vendor and the lookup that came up empty, instead of an anonymous
//! index fault.
//!
//! Specs are pure markup → listings functions. Fetching, sequencing and
//! export live in the layers above (`net`, `scrape`, `export`), which
//! keeps every spec testable offline against captured fixtures.
//!
//! Known fragility, on purpose: exactly one table structure is assumed
//! per vendor. There is no fallback or version detection; a redesigned
//! page surfaces as `PageStructure` and aborts the run.
//!
//! [`Error::PageStructure`]: crate::error::Error::PageStructure

pub mod linode;
pub mod vultr;

use scraper::{ElementRef, Selector};

/// Compile one of the spec's fixed selectors.
fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Element child at position `n`, skipping text and comment nodes.
fn nth_element_child<'a>(el: ElementRef<'a>, n: usize) -> Option<ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap).nth(n)
}

/// Descendant text, whitespace-collapsed and trimmed.
fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Collapse runs of whitespace to single spaces.
fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
