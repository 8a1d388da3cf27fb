//! lotscrape - Sutton Kersh property-auction listings to CSV

use anyhow::Result;
use clap::Parser;
use lotscrape::commands::ScrapeCommand;
use lotscrape::config::Config;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lotscrape",
    version,
    about = "Sutton Kersh property-auction listings to CSV",
    long_about = "Fetches the current-auction listings page (saving a raw snapshot), or \
                  re-parses a previously saved page, and writes one CSV row per lot with \
                  derived rental-yield metrics."
)]
struct Cli {
    /// Path to a saved listings page; fetches over the network when omitted
    html_file: Option<PathBuf>,

    /// Listings page URL
    #[arg(long, env = "LOTSCRAPE_URL")]
    url: Option<String>,

    /// Where to write the raw page snapshot after a network fetch
    #[arg(long, env = "LOTSCRAPE_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout carries the CSV, so logs go to stderr
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(url) = cli.url {
        config.listings_url = url;
    }
    if let Some(snapshot) = cli.snapshot {
        config.snapshot_path = snapshot;
    }

    let cmd = ScrapeCommand::new(config);
    cmd.execute(cli.html_file.as_deref(), io::stdout().lock()).await
}
