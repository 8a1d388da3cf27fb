//! Sutton Kersh-specific modules for fetching and parsing the listings page.

pub mod client;
pub mod models;
pub mod parser;
pub mod selectors;

pub use client::{html_from_file, ListingsClient, ListingsSource};
pub use models::ListingRow;
