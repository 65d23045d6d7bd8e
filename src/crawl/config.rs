// src/crawl/config.rs
// =============================================================================
// Settings for one crawl run.
//
// The seed URL is validated here, once, so the traversal can rely on it
// being an http(s) URL with a hostname.
// =============================================================================

use anyhow::{anyhow, Result};
use std::time::Duration;
use url::Url;

/// Pause before each first-level page fetch.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// How far the crawl goes from the seed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlMode {
    /// Fetch the seed page only and report its links.
    FirstLevelOnly,
    /// Also fetch every first-level link and merge the links found there.
    TwoLevel,
}

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub seed: Url,
    pub mode: CrawlMode,
    /// Keep only links whose path starts with "/"
    pub root_only: bool,
    pub delay: Duration,
}

impl CrawlConfig {
    /// Parses and validates `seed`, filling in the default policy.
    pub fn new(seed: &str, mode: CrawlMode) -> Result<Self> {
        let seed = Url::parse(seed).map_err(|e| anyhow!("Invalid URL '{}': {}", seed, e))?;

        if !matches!(seed.scheme(), "http" | "https") {
            return Err(anyhow!(
                "Unsupported URL scheme '{}' (expected http or https): {}",
                seed.scheme(),
                seed
            ));
        }

        if seed.host_str().is_none() {
            return Err(anyhow!("URL has no host: {}", seed));
        }

        Ok(Self {
            seed,
            mode,
            root_only: true,
            delay: DEFAULT_DELAY,
        })
    }

    /// Hostname that every reported link must share.
    pub fn seed_host(&self) -> &str {
        // new() rejects seeds without a host
        self.seed.host_str().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_seed_uses_defaults() {
        let config = CrawlConfig::new("https://Example.com/start", CrawlMode::TwoLevel).unwrap();
        assert_eq!(config.seed_host(), "example.com");
        assert_eq!(config.delay, DEFAULT_DELAY);
        assert!(config.root_only);
        assert_eq!(config.mode, CrawlMode::TwoLevel);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(CrawlConfig::new("not a url", CrawlMode::TwoLevel).is_err());
    }

    #[test]
    fn test_rejects_relative_url() {
        assert!(CrawlConfig::new("/just/a/path", CrawlMode::FirstLevelOnly).is_err());
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = CrawlConfig::new("ftp://example.com/", CrawlMode::TwoLevel).unwrap_err();
        assert!(err.to_string().contains("ftp"));
        assert!(CrawlConfig::new("mailto:me@example.com", CrawlMode::TwoLevel).is_err());
    }
}
