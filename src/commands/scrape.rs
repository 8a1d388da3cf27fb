//! Scrape command: fetch the listings page and stream it out as CSV.

use crate::config::Config;
use crate::format::CsvEmitter;
use crate::suttonkersh::{html_from_file, parser, ListingsClient, ListingsSource};
use anyhow::{Context, Result};
use scraper::Html;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Executes one scrape run: fetch, extract, emit.
pub struct ScrapeCommand {
    config: Config,
}

impl ScrapeCommand {
    /// Creates a new scrape command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the pipeline, reading from a local file when one is given and
    /// from the network otherwise.
    pub async fn execute(&self, html_file: Option<&Path>, out: impl Write) -> Result<()> {
        let html = match html_file {
            Some(path) => html_from_file(path)?,
            None => {
                let client =
                    ListingsClient::new(&self.config).context("Failed to create HTTP client")?;
                client.fetch().await?
            }
        };

        self.emit(&html, out)
    }

    /// Runs the pipeline against a provided source (for testing).
    pub async fn execute_with_source(
        &self,
        source: &impl ListingsSource,
        out: impl Write,
    ) -> Result<()> {
        let html = source.fetch().await?;
        self.emit(&html, out)
    }

    /// Parses the document and streams CSV; rows are emitted as they are
    /// extracted, so a mid-stream failure leaves a truncated output.
    fn emit(&self, html: &str, out: impl Write) -> Result<()> {
        let document = Html::parse_document(html);

        let mut emitter = CsvEmitter::new(out);
        emitter.write_header().context("Failed to write CSV header")?;

        let mut count = 0usize;
        for row in parser::rows(&document) {
            let row = row?;
            emitter.write_row(&row).context("Failed to write CSV row")?;
            count += 1;
        }

        info!("Scrape complete: {} lots", count);
        Ok(())
    }
}
