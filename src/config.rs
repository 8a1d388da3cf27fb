//! Configuration management with TOML, environment variables, and CLI overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The current-auction listings page, all lots on one page.
pub const CURRENT_LISTINGS_URL: &str =
    "http://www.suttonkersh.co.uk/properties/listview/?section=auction&auctionPeriod=current&perPage=all";

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// URL of the listings page to scrape.
    #[serde(default = "default_listings_url")]
    pub listings_url: String,

    /// Where the raw response bytes are written back after a network fetch.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,
}

fn default_listings_url() -> String {
    CURRENT_LISTINGS_URL.to_string()
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("sample_page.html")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listings_url: default_listings_url(),
            snapshot_path: default_snapshot_path(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("lotscrape").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(url) = std::env::var("LOTSCRAPE_URL") {
            self.listings_url = url;
        }

        if let Ok(path) = std::env::var("LOTSCRAPE_SNAPSHOT") {
            self.snapshot_path = PathBuf::from(path);
        }

        self
    }
}
