//! Row extractor for the listings table.
//!
//! Each lot occupies a pair of table rows: a header row carrying the
//! positional cells (lot number, address, postcode, status) and the
//! immediately following detail row carrying the description, links and
//! photo. Extraction is strictly positional and pattern-based to match
//! the page as served; see `selectors` for the markers.

use crate::error::ScrapeError;
use crate::suttonkersh::models::ListingRow;
use crate::suttonkersh::selectors;
use scraper::{ElementRef, Html};
use tracing::trace;

/// Returns a lazy iterator over the row pairs of the document, one
/// `ListingRow` (or extraction error) per header row found.
pub fn rows(document: &Html) -> impl Iterator<Item = Result<ListingRow, ScrapeError>> + '_ {
    document.select(&selectors::HEADER_ROW).map(parse_row_pair)
}

/// Parses one header-row/detail-row pair into a `ListingRow` with its
/// derived yield fields filled in.
pub fn parse_row_pair(header: ElementRef<'_>) -> Result<ListingRow, ScrapeError> {
    let detail = detail_row(header)?;
    let cells = header_cells(header)?;

    let lot_number = text_of(cells[0]);
    let street_address = text_of(cells[1]);
    let postcode = text_of(cells[2]);
    let status = text_of(cells[3]);

    let description = text_of(exactly_one(
        detail.select(&selectors::DESCRIPTION),
        "description paragraph",
    )?);

    let (guide_price_low, guide_price_high) = parse_guide_price(&status)?;

    let has_assured_shorthold_tenancy =
        description.to_lowercase().contains("assured shorthold");
    let ast_annual_income = if has_assured_shorthold_tenancy {
        parse_annual_income(&description)?
    } else {
        None
    };

    let mut row = ListingRow {
        lot_number,
        street_address,
        postcode,
        status,
        guide_price_low,
        guide_price_high,
        yield_guide_price_high: None,
        price_10pct_yield: None,
        price_12_5pct_yield: None,
        price_15pct_yield: None,
        price_20pct_yield: None,
        has_assured_shorthold_tenancy,
        ast_annual_income,
        description,
        detail_url: detail_url(detail)?,
        photo_url: photo_url(detail)?,
    };
    row.compute_yields();

    trace!("Parsed lot {}: {}", row.lot_number, row.street_address);
    Ok(row)
}

/// Parses a guide price pair out of the status cell text.
///
/// Two grammars are tried in order: a low-high range and a single
/// "£N+*" value which fills both bounds. Any other status text (sold,
/// withdrawn, ...) yields no guide price, which is not an error.
pub fn parse_guide_price(status: &str) -> Result<(Option<i64>, Option<i64>), ScrapeError> {
    if let Some(caps) = selectors::GUIDE_PRICE_RANGE.captures(status) {
        let low = parse_price(&caps[1])?;
        let high = parse_price(&caps[2])?;
        return Ok((Some(low), Some(high)));
    }

    if let Some(caps) = selectors::GUIDE_PRICE_PLUS.captures(status) {
        let price = parse_price(&caps[1])?;
        return Ok((Some(price), Some(price)));
    }

    Ok((None, None))
}

/// Mines the disclosed annual income ("£15,400 per annum") out of the
/// description text. Absence is a valid outcome.
pub fn parse_annual_income(description: &str) -> Result<Option<i64>, ScrapeError> {
    match selectors::ANNUAL_INCOME.captures(description) {
        Some(caps) => Ok(Some(parse_price(&caps[1])?)),
        None => Ok(None),
    }
}

/// Parses a price substring: whitespace and thousands commas stripped,
/// parsed as a decimal number, truncated toward zero.
pub fn parse_price(text: &str) -> Result<i64, ScrapeError> {
    let cleaned = text.trim().replace(',', "");
    let value: f64 = cleaned
        .parse()
        .map_err(|_| ScrapeError::PriceFormat(text.to_string()))?;
    Ok(value as i64)
}

/// Finds the detail row paired with a header row: the immediately
/// following sibling element, which must be a non-header `tr`.
fn detail_row(header: ElementRef<'_>) -> Result<ElementRef<'_>, ScrapeError> {
    let id = header.value().attr("id").unwrap_or("").to_string();

    let sibling = header
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .next()
        .ok_or_else(|| {
            ScrapeError::structure(format!("header row {id:?} has no following sibling row"))
        })?;

    let sibling_id = sibling.value().attr("id").unwrap_or("");
    if sibling.value().name() != "tr" || sibling_id.contains(selectors::HEADER_ROW_MARKER) {
        return Err(ScrapeError::structure(format!(
            "header row {id:?} is not followed by a detail row"
        )));
    }

    Ok(sibling)
}

/// Collects the direct `td` children of the header row; the first four
/// carry lot number, address, postcode and status in that order.
fn header_cells(header: ElementRef<'_>) -> Result<Vec<ElementRef<'_>>, ScrapeError> {
    let cells: Vec<_> = header
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "td")
        .collect();

    if cells.len() < 4 {
        return Err(ScrapeError::structure(format!(
            "header row has {} cells, expected at least 4",
            cells.len()
        )));
    }

    Ok(cells)
}

fn detail_url(detail: ElementRef<'_>) -> Result<String, ScrapeError> {
    let anchor = exactly_one(
        detail
            .select(&selectors::ANCHOR)
            .filter(|a| a.text().collect::<String>().contains("Details")),
        "Details link",
    )?;

    let href = anchor
        .value()
        .attr("href")
        .ok_or_else(|| ScrapeError::structure("Details link has no href"))?;

    Ok(absolute_url(href))
}

fn photo_url(detail: ElementRef<'_>) -> Result<String, ScrapeError> {
    let image = exactly_one(detail.select(&selectors::LOT_IMAGE), "lot image")?;

    let src = image
        .value()
        .attr("src")
        .ok_or_else(|| ScrapeError::structure("lot image has no src"))?;

    Ok(absolute_url(src))
}

fn absolute_url(path: &str) -> String {
    format!("{}{}", selectors::SITE_ORIGIN, path)
}

/// Stripped text content of an element.
fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Unwraps an iterator expected to yield exactly one element.
fn exactly_one<'a>(
    mut iter: impl Iterator<Item = ElementRef<'a>>,
    what: &str,
) -> Result<ElementRef<'a>, ScrapeError> {
    let first = iter
        .next()
        .ok_or_else(|| ScrapeError::structure(format!("no {what} found in detail row")))?;

    if iter.next().is_some() {
        return Err(ScrapeError::structure(format!(
            "multiple {what} elements found in detail row"
        )));
    }

    Ok(first)
}
