// src/crawl/traverse.rs
// =============================================================================
// This module runs the crawl itself, in two phases.
//
// How it works:
// 1. Fetch the seed page and extract its links -> the first-level links
// 2. In first-level-only mode, stop and return exactly those
// 3. Otherwise visit each first-level link in order: wait, fetch it,
//    extract its links into the same ledger
// 4. Return everything the ledger collected, in discovery order
//
// Politeness:
// - One request at a time, never in parallel
// - A fixed pause before every first-level fetch
//
// Failure handling:
// - The seed page must load; without it there is nothing to report
// - A first-level page that fails is logged and skipped
//
// Rust concepts:
// - Per-run state: the ledger and visited set live inside run(), so a
//   Crawler can be reused and two crawls never share anything
// - HashSet: O(1) "have we fetched this page already?"
// =============================================================================

use anyhow::{Context, Result};
use std::collections::HashSet;
use tracing::{debug, info, warn};
use url::Url;

use super::config::{CrawlConfig, CrawlMode};
use crate::extract::{extract_links, LinkLedger};
use crate::fetch::Fetcher;

pub struct Crawler {
    config: CrawlConfig,
    fetcher: Fetcher,
}

impl Crawler {
    pub fn new(config: CrawlConfig) -> Result<Self> {
        let fetcher = Fetcher::new().context("Failed to create HTTP client")?;
        Ok(Self { config, fetcher })
    }

    /// Runs one crawl and returns the discovered URLs.
    ///
    /// First-level-only mode returns the seed page's links. Two-level
    /// mode returns every distinct link found on the seed page and on the
    /// pages it links to.
    pub async fn run(&self) -> Result<Vec<String>> {
        let mut ledger = LinkLedger::new();

        info!("Extracting links from {}", self.config.seed);
        let first_level = self
            .collect_links(&self.config.seed, &mut ledger)
            .await
            .with_context(|| format!("Failed to crawl seed page {}", self.config.seed))?;

        if self.config.mode == CrawlMode::FirstLevelOnly {
            return Ok(first_level);
        }

        info!("Found {} link(s), following each of them...", first_level.len());

        let mut visited = HashSet::new();
        let total = first_level.len();

        for (i, link) in first_level.iter().enumerate() {
            if !visited.insert(link.as_str()) {
                continue;
            }

            info!("Processing ({}/{}): {}", i + 1, total, link);

            tokio::time::sleep(self.config.delay).await;

            let page = match Url::parse(link) {
                Ok(url) => url,
                Err(e) => {
                    warn!("Skipping {}: {}", link, e);
                    continue;
                }
            };

            // A broken page costs us its links, not the whole crawl
            if let Err(e) = self.collect_links(&page, &mut ledger).await {
                warn!("Error while processing {}: {:#}", link, e);
            }
        }

        if ledger.is_empty() {
            debug!("No same-domain links found");
        } else {
            debug!("{} unique link(s) collected", ledger.len());
        }

        Ok(ledger.into_links())
    }

    // Fetches one page and records its new links in the ledger
    async fn collect_links(&self, page: &Url, ledger: &mut LinkLedger) -> Result<Vec<String>> {
        let html = self.fetcher.fetch(page).await?;

        let links = extract_links(
            &html,
            page,
            self.config.seed_host(),
            self.config.root_only,
            ledger,
        );
        debug!("{} new link(s) on {}", links.len(), page);

        Ok(links)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is the ledger passed as &mut instead of living in the Crawler?
//    - run() takes &self, so the Crawler itself never changes
//    - Each call to run() starts from an empty ledger
//    - Extraction borrows the ledger mutably only for the length of one call
//
// 2. What does visited.insert() return?
//    - true if the value was new, false if it was already present
//    - So "if !visited.insert(x) { continue }" means "skip what we've done"
//
// 3. Why sleep before the fetch instead of after?
//    - The seed page has just been fetched, so the very first follow-up
//      request is already spaced out from it
// -----------------------------------------------------------------------------
