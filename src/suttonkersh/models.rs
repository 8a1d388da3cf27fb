//! Data model for parsed auction lots.

use serde::{Deserialize, Serialize};

/// Target yield rates for the required-purchase-price columns.
pub const YIELD_RATES: [f64; 4] = [0.10, 0.125, 0.15, 0.20];

/// One parsed auction lot.
///
/// Rows are ephemeral: constructed by the extractor, decorated with the
/// derived yield fields, serialized, and discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRow {
    /// Lot number as printed in the table.
    pub lot_number: String,
    /// Street address of the property.
    pub street_address: String,
    /// Postcode of the property.
    pub postcode: String,
    /// Status cell text, e.g. "Guide Price: £100,000-£120,000*" or "Sold Prior".
    pub status: String,
    /// Lower bound of the guide price, when the status text carries one.
    pub guide_price_low: Option<i64>,
    /// Upper bound of the guide price; equals the low bound for "£N+*" statuses.
    pub guide_price_high: Option<i64>,
    /// (guide_price_high / ast_annual_income) / 100, scaling preserved from
    /// the published figures.
    pub yield_guide_price_high: Option<f64>,
    /// Purchase price required for a 10% yield on the disclosed income.
    pub price_10pct_yield: Option<f64>,
    /// Purchase price required for a 12.5% yield.
    pub price_12_5pct_yield: Option<f64>,
    /// Purchase price required for a 15% yield.
    pub price_15pct_yield: Option<f64>,
    /// Purchase price required for a 20% yield.
    pub price_20pct_yield: Option<f64>,
    /// Whether the description mentions an assured shorthold tenancy.
    pub has_assured_shorthold_tenancy: bool,
    /// Annual rental income disclosed in the description, AST lots only.
    pub ast_annual_income: Option<i64>,
    /// Free-text lot description.
    pub description: String,
    /// Absolute URL of the lot detail page.
    pub detail_url: String,
    /// Absolute URL of the lot photo.
    pub photo_url: String,
}

impl ListingRow {
    /// Fills in the derived yield fields from the base fields.
    ///
    /// All five stay absent unless `ast_annual_income` is present; the
    /// ratio additionally needs `guide_price_high`.
    pub fn compute_yields(&mut self) {
        let Some(income) = self.ast_annual_income else {
            return;
        };
        let income = income as f64;

        self.price_10pct_yield = Some(income / 0.10);
        self.price_12_5pct_yield = Some(income / 0.125);
        self.price_15pct_yield = Some(income / 0.15);
        self.price_20pct_yield = Some(income / 0.20);

        if let Some(high) = self.guide_price_high {
            self.yield_guide_price_high = Some((high as f64 / income) / 100.0);
        }
    }
}
