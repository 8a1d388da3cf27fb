//! CSS selectors and text patterns for the Sutton Kersh listings page.
//!
//! This file contains all selectors and regexes used for parsing the
//! listings table. Update this file when the site changes its HTML
//! structure, and add a test fixture capturing the new markup.

use regex_lite::Regex;
use scraper::Selector;
use std::sync::LazyLock;

/// Site origin prefixed onto relative detail/photo paths.
pub const SITE_ORIGIN: &str = "http://www.suttonkersh.co.uk";

/// Marker substring on header-row ids; a listing occupies a header row
/// followed by a detail row.
pub const HEADER_ROW_MARKER: &str = "header_";

/// Header rows of the listings table, one per lot.
pub static HEADER_ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr[id*='header_']").unwrap());

/// Free-text description paragraph inside the detail row.
pub static DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p[class*='descriptionText']").unwrap());

/// Anchors inside the detail row; the details link is found by its
/// visible text, which CSS cannot express.
pub static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

/// Lot photo inside the detail row.
pub static LOT_IMAGE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img[class*='lotImage']").unwrap());

/// "Guide Price: £{low}...£{high}*" - both amounts captured.
pub static GUIDE_PRICE_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Guide Price: £([0-9,]+).+£([0-9,]+)\*$").unwrap());

/// "Guide Price: £{price}+*" - single amount captured.
pub static GUIDE_PRICE_PLUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Guide Price: £([0-9,]+)\+\*$").unwrap());

/// "£{amount} per annum" inside the description text.
pub static ANNUAL_INCOME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"£([0-9,.]+) per annum").unwrap());
