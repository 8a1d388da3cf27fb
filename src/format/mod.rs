//! CSV output for listing rows.
//!
//! The column order and names are part of the external contract and must
//! not be reordered or renamed; downstream spreadsheets key off them.

use crate::suttonkersh::ListingRow;
use std::io::{self, Write};

/// The 16 output columns, in contract order.
pub const FIELDS: [&str; 16] = [
    "lot_number",
    "street_address",
    "postcode",
    "status",
    "guide_price_low",
    "guide_price_high",
    "_yield_guide_price_high",
    "_price_10pct_yield",
    "_price_12.5pct_yield",
    "_price_15pct_yield",
    "_price_20pct_yield",
    "has_assured_shorthold_tenancy",
    "ast_annual_income",
    "description",
    "detail_url",
    "photo_url",
];

/// Writes listing rows as CSV, one write per row; the row sequence is
/// never buffered.
pub struct CsvEmitter<W: Write> {
    out: W,
}

impl<W: Write> CsvEmitter<W> {
    /// Creates an emitter over any writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the fixed header line.
    pub fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", FIELDS.join(","))
    }

    /// Writes one data line; absent fields are serialized empty.
    pub fn write_row(&mut self, row: &ListingRow) -> io::Result<()> {
        let fields = [
            csv_escape(&row.lot_number),
            csv_escape(&row.street_address),
            csv_escape(&row.postcode),
            csv_escape(&row.status),
            opt_int(row.guide_price_low),
            opt_int(row.guide_price_high),
            opt_float(row.yield_guide_price_high),
            opt_float(row.price_10pct_yield),
            opt_float(row.price_12_5pct_yield),
            opt_float(row.price_15pct_yield),
            opt_float(row.price_20pct_yield),
            row.has_assured_shorthold_tenancy.to_string(),
            opt_int(row.ast_annual_income),
            csv_escape(&row.description),
            csv_escape(&row.detail_url),
            csv_escape(&row.photo_url),
        ];

        writeln!(self.out, "{}", fields.join(","))
    }
}

fn opt_int(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn opt_float(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
