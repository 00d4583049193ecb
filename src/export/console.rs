// src/export/console.rs

use std::fmt::Write;

use crate::data::{COLUMNS, Listing};

/// Left-justified column widths; the last column runs unpadded.
const WIDTHS: [usize; 4] = [10, 9, 9, 11];

/// Render the aligned table, header row first. Pure so tests can check
/// the exact layout.
pub fn render(listings: &[Listing]) -> String {
    let mut out = String::new();
    push_row(&mut out, COLUMNS);
    for l in listings {
        push_row(&mut out, l.fields());
    }
    out
}

pub fn print(listings: &[Listing]) {
    print!("{}", render(listings));
}

fn push_row(out: &mut String, fields: [&str; 5]) {
    let _ = writeln!(
        out,
        "{:<w0$}{:<w1$}{:<w2$}{:<w3$}{}",
        fields[0],
        fields[1],
        fields[2],
        fields[3],
        fields[4],
        w0 = WIDTHS[0],
        w1 = WIDTHS[1],
        w2 = WIDTHS[2],
        w3 = WIDTHS[3],
    );
}
