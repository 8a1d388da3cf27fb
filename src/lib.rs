//! lotscrape - Sutton Kersh property-auction listings to CSV
//!
//! A single-pass pipeline: fetch the listings page (or read a saved
//! copy), extract one row per lot, and stream CSV to stdout with derived
//! rental-yield metrics.

pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod suttonkersh;

pub use config::Config;
pub use error::ScrapeError;
pub use suttonkersh::ListingRow;
