//! HTTP fetcher for the listings page.

use crate::config::Config;
use crate::error::ScrapeError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};
use wreq::Client;

/// The encoding this scraper is written against; the extraction rules
/// assume the page text decodes as UTF-8.
pub const PAGE_ENCODING: &str = "utf-8";

/// Source of the listings page HTML - enables mocking for tests.
#[async_trait]
pub trait ListingsSource: Send + Sync {
    /// Produces the decoded HTML text of the listings page.
    async fn fetch(&self) -> Result<String>;
}

/// HTTP client for the listings page, with a raw-byte snapshot written
/// back to disk on every successful fetch.
pub struct ListingsClient {
    client: Client,
    listings_url: String,
    snapshot_path: PathBuf,
}

impl ListingsClient {
    /// Creates a new client from the configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            listings_url: config.listings_url.clone(),
            snapshot_path: config.snapshot_path.clone(),
        })
    }

    /// Performs the GET and decodes the body, writing the raw bytes to
    /// the snapshot path as a side effect.
    async fn get(&self) -> Result<String> {
        debug!("GET {}", self.listings_url);

        let response = self
            .client
            .get(&self.listings_url)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(ScrapeError::Fetch {
                url: self.listings_url.clone(),
                status: status.as_u16(),
            }
            .into());
        }

        // The extraction rules are written against one encoding; a page
        // served in anything else must abort, not be reinterpreted.
        if let Some(declared) = declared_charset(&response) {
            if !declared.eq_ignore_ascii_case(PAGE_ENCODING) {
                return Err(ScrapeError::EncodingMismatch {
                    declared,
                    expected: PAGE_ENCODING,
                }
                .into());
            }
        }

        let bytes = response.bytes().await.context("Failed to read response body")?;

        self.write_snapshot(&bytes)?;

        String::from_utf8(bytes.to_vec()).map_err(|_| {
            ScrapeError::EncodingMismatch {
                declared: "undeclared, body is not valid utf-8".to_string(),
                expected: PAGE_ENCODING,
            }
            .into()
        })
    }

    /// Overwrites the snapshot file with the raw response bytes. A write
    /// failure propagates; there is no read-back.
    fn write_snapshot(&self, bytes: &[u8]) -> Result<()> {
        debug!("Writing snapshot to {}", self.snapshot_path.display());

        std::fs::write(&self.snapshot_path, bytes).with_context(|| {
            format!("Failed to write snapshot: {}", self.snapshot_path.display())
        })
    }
}

#[async_trait]
impl ListingsSource for ListingsClient {
    async fn fetch(&self) -> Result<String> {
        info!("Fetching listings from {}", self.listings_url);
        self.get().await
    }
}

/// Extracts the charset parameter from the response Content-Type, if any.
fn declared_charset(response: &wreq::Response) -> Option<String> {
    let content_type = response.headers().get("content-type")?.to_str().ok()?;

    content_type
        .split(';')
        .skip(1)
        .find_map(|param| param.trim().strip_prefix("charset="))
        .map(|charset| charset.trim_matches('"').to_string())
}

/// Reads and decodes a previously saved listings page from disk.
pub fn html_from_file(path: &Path) -> Result<String> {
    debug!("Reading listings from file: {}", path.display());

    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read listings file: {}", path.display()))?;

    String::from_utf8(bytes).map_err(|_| {
        ScrapeError::EncodingMismatch {
            declared: format!("file {} is not valid utf-8", path.display()),
            expected: PAGE_ENCODING,
        }
        .into()
    })
}
