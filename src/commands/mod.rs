//! CLI command implementations.

pub mod scrape;

pub use scrape::ScrapeCommand;
