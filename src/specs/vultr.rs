// src/specs/vultr.rs
//
// Structural contract (https://www.vultr.com/pricing/, compute section):
//
//   div#compute
//     div.pt__row-content            one per plan
//       div.pt__cell × 6, read positionally:
//         [1] → child → child        storage    "25 GB SSD"
//         [2] → child → child        cpu        "1 vCPU"
//         [3] → child                memory     "1 GB"
//         [4] → child → child        bandwidth  "1 TB"
//         [5] → child → child        price amount, plus the bare text
//             node trailing the amount element ("/mo"), tabs and
//             newlines trimmed off
//
// Cell [0] is the plan-type marker and is not part of a listing.

use scraper::{ElementRef, Html};

use super::{nth_element_child, sel, text_of};
use crate::data::Listing;
use crate::error::{Error, Result};

const VENDOR: &str = "vultr";

/// Extract all compute listings, in document order.
/// No rows (or no compute section at all) is an empty set, not an error.
pub fn extract(page: &str) -> Result<Vec<Listing>> {
    let doc = Html::parse_document(page);
    let row_sel = sel("div#compute div.pt__row-content");
    let cell_sel = sel("div.pt__cell");

    let mut out = Vec::new();
    for row in doc.select(&row_sel) {
        let cells: Vec<ElementRef> = row.select(&cell_sel).collect();
        out.push(listing_from_row(&cells)?);
    }
    Ok(out)
}

fn listing_from_row(cells: &[ElementRef]) -> Result<Listing> {
    let storage = leaf_text(cells, 1, "storage")?;
    let cpu = leaf_text(cells, 2, "cpu")?;
    let memory = memory_text(cells)?;
    let bandwidth = leaf_text(cells, 4, "bandwidth")?;
    let price = price_text(cells)?;
    Ok(Listing::new(cpu, memory, storage, bandwidth, price))
}

/* ---------- per-field lookups ---------- */

fn cell<'a>(cells: &[ElementRef<'a>], ix: usize, field: &'static str) -> Result<ElementRef<'a>> {
    cells
        .get(ix)
        .copied()
        .ok_or_else(|| Error::structure(VENDOR, format!("{field} cell [{ix}] missing")))
}

/// Most spec values sit two levels deep: cell → wrapper → value element.
fn leaf_text(cells: &[ElementRef], ix: usize, field: &'static str) -> Result<String> {
    let c = cell(cells, ix, field)?;
    let leaf = nth_element_child(c, 0)
        .and_then(|wrapper| nth_element_child(wrapper, 0))
        .ok_or_else(|| Error::structure(VENDOR, format!("{field} value node missing in cell [{ix}]")))?;
    Ok(text_of(leaf))
}

/// Memory sits one level shallower than the other cells.
fn memory_text(cells: &[ElementRef]) -> Result<String> {
    let c = cell(cells, 3, "memory")?;
    let leaf = nth_element_child(c, 0)
        .ok_or_else(|| Error::structure(VENDOR, "memory value node missing in cell [3]"))?;
    Ok(text_of(leaf))
}

/// The amount element ("$5.00") is followed by the billing unit as a bare
/// text node ("/mo"). Both belong to the listing's price field.
fn price_text(cells: &[ElementRef]) -> Result<String> {
    let c = cell(cells, 5, "price")?;
    let amount = nth_element_child(c, 0)
        .and_then(|wrapper| nth_element_child(wrapper, 0))
        .ok_or_else(|| Error::structure(VENDOR, "price amount node missing in cell [5]"))?;
    let unit = amount
        .next_sibling()
        .and_then(|n| n.value().as_text())
        .map(|t| t.text.trim_matches(&['\n', '\t'][..]).to_string())
        .unwrap_or_default();
    Ok(format!("{}{}", text_of(amount), unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <html><body>
        <div id="compute">
          <div class="pt__row-content">
            <div class="pt__cell"><span>Regular Performance</span></div>
            <div class="pt__cell"><div><span>25 GB SSD</span></div></div>
            <div class="pt__cell"><div><strong>1 vCPU</strong></div></div>
            <div class="pt__cell"><span>1 GB</span></div>
            <div class="pt__cell"><div><span>1 TB</span></div></div>
            <div class="pt__cell"><div><strong>$5.00</strong>/mo</div></div>
          </div>
          <div class="pt__row-content">
            <div class="pt__cell"><span>Regular Performance</span></div>
            <div class="pt__cell"><div><span>55 GB SSD</span></div></div>
            <div class="pt__cell"><div><strong>2 vCPUs</strong></div></div>
            <div class="pt__cell"><span>2 GB</span></div>
            <div class="pt__cell"><div><span>3 TB</span></div></div>
            <div class="pt__cell"><div><strong>$10.00</strong>/mo
	</div></div>
          </div>
        </div>
        </body></html>
    "#;

    #[test]
    fn extracts_rows_in_document_order() {
        let listings = extract(SAMPLE).unwrap();
        assert_eq!(
            listings,
            vec![
                Listing::new("1 vCPU", "1 GB", "25 GB SSD", "1 TB", "$5.00/mo"),
                Listing::new("2 vCPUs", "2 GB", "55 GB SSD", "3 TB", "$10.00/mo"),
            ]
        );
    }

    #[test]
    fn price_unit_tail_is_trimmed_of_newlines_and_tabs() {
        // Second sample row carries "/mo\n\t" in the markup.
        let listings = extract(SAMPLE).unwrap();
        assert_eq!(listings[1].price, "$10.00/mo");
    }

    #[test]
    fn no_matching_rows_is_empty_not_an_error() {
        let listings = extract("<html><body><p>maintenance</p></body></html>").unwrap();
        assert!(listings.is_empty());

        // Section present but holds no rows.
        let listings = extract(r#"<div id="compute"><div class="pt__header"></div></div>"#).unwrap();
        assert!(listings.is_empty());
    }

    #[test]
    fn missing_field_node_fails_with_structure_error() {
        // Memory cell [3] lost its value element.
        let page = r#"
            <div id="compute">
              <div class="pt__row-content">
                <div class="pt__cell"><span>Regular Performance</span></div>
                <div class="pt__cell"><div><span>25 GB SSD</span></div></div>
                <div class="pt__cell"><div><strong>1 vCPU</strong></div></div>
                <div class="pt__cell"></div>
                <div class="pt__cell"><div><span>1 TB</span></div></div>
                <div class="pt__cell"><div><strong>$5.00</strong>/mo</div></div>
              </div>
            </div>
        "#;
        let err = extract(page).unwrap_err();
        assert!(matches!(err, Error::PageStructure { vendor: "vultr", .. }));
        assert!(err.to_string().contains("memory"));
    }

    #[test]
    fn missing_cell_fails_with_structure_error() {
        // Row truncated after the cpu cell.
        let page = r#"
            <div id="compute">
              <div class="pt__row-content">
                <div class="pt__cell"><span>Regular Performance</span></div>
                <div class="pt__cell"><div><span>25 GB SSD</span></div></div>
                <div class="pt__cell"><div><strong>1 vCPU</strong></div></div>
              </div>
            </div>
        "#;
        let err = extract(page).unwrap_err();
        assert!(matches!(err, Error::PageStructure { vendor: "vultr", .. }));
    }
}
