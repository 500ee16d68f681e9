//! Configuration file parser for the widget.
//!
//! The config file is optional — a missing file yields `Config::default()`,
//! which seeds the registry with a built-in starter feed list. Unknown keys
//! are silently ignored by serde.

use crate::registry::SeedFeed;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),
}

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
/// Missing keys fall back to `Default::default()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed feed list for the registry. Must be non-empty.
    pub feeds: Vec<SeedFeed>,

    /// Per-request deadline in seconds for feed fetches and probes.
    pub request_timeout_secs: u64,

    /// Maximum retries on 429/5xx responses.
    pub max_retries: u32,

    /// Maximum response body size in bytes.
    pub max_response_bytes: usize,

    /// User-Agent header sent with feed requests.
    pub user_agent: String,

    /// Allow adding feeds hosted on localhost/private networks
    /// (self-hosted aggregators). Off by default: the SSRF policy stands.
    pub allow_private_hosts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feeds: default_feeds(),
            request_timeout_secs: 30,
            max_retries: 3,
            max_response_bytes: 10 * 1024 * 1024,
            user_agent: concat!("plume/", env!("CARGO_PKG_VERSION")).to_string(),
            allow_private_hosts: false,
        }
    }
}

/// The built-in starter feeds used when no config file is present.
fn default_feeds() -> Vec<SeedFeed> {
    [
        ("Udacity Blog", "http://blog.udacity.com/feed"),
        ("CSS Tricks", "http://css-tricks.com/feed"),
        ("HTML5 Rocks", "http://feeds.feedburner.com/html5rocks"),
        (
            "Linear Digressions",
            "http://feeds.feedburner.com/udacity-linear-digressions",
        ),
    ]
    .iter()
    .map(|(name, url)| SeedFeed {
        name: name.to_string(),
        url: url.to_string(),
    })
    .collect()
}

impl Config {
    /// Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Loads configuration from a TOML file, or defaults when it is absent.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let metadata = std::fs::metadata(path)?;
        if metadata.len() > Self::MAX_FILE_SIZE {
            return Err(ConfigError::TooLarge(format!(
                "{} bytes (max {})",
                metadata.len(),
                Self::MAX_FILE_SIZE
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_seed_four_feeds() {
        let config = Config::default();
        assert_eq!(config.feeds.len(), 4);
        assert!(config
            .feeds
            .iter()
            .all(|f| !f.name.is_empty() && !f.url.is_empty()));
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.max_retries, 3);
        assert!(!config.allow_private_hosts);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load(Path::new("/nonexistent/plume.toml")).unwrap();
        assert_eq!(config.feeds.len(), 4);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("request_timeout_secs = 5").unwrap();
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.feeds.len(), 4);
    }

    #[test]
    fn test_feed_list_parses() {
        let config: Config = toml::from_str(
            r#"
            [[feeds]]
            name = "Example"
            url = "https://example.com/feed.xml"
            "#,
        )
        .unwrap();
        assert_eq!(config.feeds.len(), 1);
        assert_eq!(config.feeds[0].name, "Example");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config: Config = toml::from_str("future_knob = true").unwrap();
        assert_eq!(config.max_retries, 3);
    }
}
